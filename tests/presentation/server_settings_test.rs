use std::net::{IpAddr, Ipv4Addr};

use voicebridge::presentation::ServerSettings;
use voicebridge::presentation::config::DEFAULT_PORT;

#[test]
fn given_no_port_when_resolving_then_listens_on_8080() {
    let settings = ServerSettings::from_port_var(None);

    assert_eq!(settings.port, 8080);
    assert_eq!(DEFAULT_PORT, 8080);
}

#[test]
fn given_valid_port_when_resolving_then_uses_it() {
    let settings = ServerSettings::from_port_var(Some("7860"));

    assert_eq!(settings.port, 7860);
}

#[test]
fn given_invalid_port_when_resolving_then_falls_back_to_default() {
    assert_eq!(ServerSettings::from_port_var(Some("eighty")).port, 8080);
    assert_eq!(ServerSettings::from_port_var(Some("70000")).port, 8080);
    assert_eq!(ServerSettings::from_port_var(Some("")).port, 8080);
}

#[test]
fn given_any_port_when_building_address_then_binds_all_interfaces() {
    let settings = ServerSettings::from_port_var(Some("9000"));

    let addr = settings.socket_addr();

    assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(addr.port(), 9000);
}
