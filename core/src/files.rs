use crate::error::{CoreError, Result};
use memmap2::Mmap;
use serde::de::DeserializeOwned;
use std::{fs::File, path::Path};

pub fn open_memory_mapped_file(file_path: &Path) -> Result<Mmap> {
    let file = File::open(file_path).map_err(|e| CoreError::io(e, file_path))?;
    unsafe { Mmap::map(&file) }.map_err(|e| CoreError::io(e, file_path))
}

pub fn read_json_file<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let data = open_memory_mapped_file(file_path)?;
    serde_json::from_slice(&data).map_err(|e| CoreError::json(e, file_path))
}
