use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use candle_core::pickle::{Object, Stack, TensorInfo};
use candle_core::{Device, Tensor};
use zip::ZipArchive;

use crate::application::ports::ConversionError;

/// Key under which training scripts store the module state dicts.
pub const STATE_DICT_KEY: &str = "net";

/// Reads every tensor from a PyTorch zip checkpoint.
///
/// Nested module dicts are flattened into dotted names
/// (`{"net": {"cfm": {"w": t}}}` becomes `cfm.w`). When the top-level dict
/// holds a `net` entry only that entry is read; otherwise the whole dict is.
pub fn read_pth_checkpoint(path: &Path) -> Result<Vec<(String, Tensor)>, ConversionError> {
    let load_failed = |e: &dyn fmt::Display| {
        ConversionError::ModelLoadFailed(format!("{}: {}", path.display(), e))
    };

    let file = File::open(path).map_err(|e| load_failed(&e))?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|e| load_failed(&e))?;

    let pickles: Vec<String> = archive
        .file_names()
        .filter(|name| name.ends_with("data.pkl"))
        .map(str::to_string)
        .collect();

    let mut infos = Vec::new();
    for pickle in &pickles {
        let dir_name = PathBuf::from(pickle.trim_end_matches(".pkl"));
        let entry = archive.by_name(pickle).map_err(|e| load_failed(&e))?;

        let mut stack = Stack::empty();
        stack
            .read_loop(&mut BufReader::new(entry))
            .map_err(|e| load_failed(&e))?;
        let root = stack.finalize().map_err(|e| load_failed(&e))?;

        collect_tensor_infos(select_state_dict(root), String::new(), &dir_name, &mut infos);
    }

    let mut weights = Vec::with_capacity(infos.len());
    for info in infos {
        let mut entry = archive.by_name(&info.path).map_err(|e| load_failed(&e))?;
        let mut raw = Vec::new();
        entry.read_to_end(&mut raw).map_err(|e| load_failed(&e))?;
        let tensor = tensor_from_storage(&info, &raw).map_err(|e| load_failed(&e))?;
        weights.push((info.name, tensor));
    }

    Ok(weights)
}

fn select_state_dict(root: Object) -> Object {
    match root {
        Object::Dict(entries) => {
            let key = Object::Unicode(STATE_DICT_KEY.to_string());
            if entries.iter().any(|(k, _)| *k == key) {
                entries
                    .into_iter()
                    .find_map(|(k, v)| (k == key).then_some(v))
                    .unwrap_or(Object::None)
            } else {
                Object::Dict(entries)
            }
        }
        other => other,
    }
}

fn collect_tensor_infos(
    node: Object,
    prefix: String,
    dir_name: &Path,
    out: &mut Vec<TensorInfo>,
) {
    let Object::Dict(entries) = node else {
        return;
    };

    for (key, value) in entries {
        let Object::Unicode(key) = key else {
            continue;
        };
        let name = if prefix.is_empty() {
            key
        } else {
            format!("{}.{}", prefix, key)
        };

        if matches!(value, Object::Dict(_)) {
            collect_tensor_infos(value, name, dir_name, out);
            continue;
        }

        match value.into_tensor_info(Object::Unicode(name.clone()), dir_name) {
            Ok(Some(info)) => out.push(info),
            Ok(None) => {}
            Err(e) => tracing::debug!(name = %name, error = %e, "Skipping checkpoint entry"),
        }
    }
}

fn tensor_from_storage(info: &TensorInfo, raw: &[u8]) -> candle_core::Result<Tensor> {
    let layout = &info.layout;
    let dims = layout.dims();
    let rank = dims.len();
    let fortran = rank > 1 && layout.is_fortran_contiguous() && !layout.is_contiguous();

    if !layout.is_contiguous() && !fortran {
        candle_core::bail!("{}: non-contiguous tensors are not supported", info.name)
    }

    let start = layout.start_offset();
    let len = layout.shape().elem_count() * info.dtype.size_in_bytes();
    let Some(bytes) = raw.get(start..start + len) else {
        candle_core::bail!(
            "{}: storage holds {} bytes, tensor needs {} from offset {}",
            info.name,
            raw.len(),
            len,
            start
        )
    };

    if fortran {
        let reversed: Vec<usize> = dims.iter().rev().copied().collect();
        let axes: Vec<usize> = (0..rank).rev().collect();
        Tensor::from_raw_buffer(bytes, info.dtype, &reversed, &Device::Cpu)?.permute(axes)
    } else {
        Tensor::from_raw_buffer(bytes, info.dtype, dims, &Device::Cpu)
    }
}
