//! Pseudo-file reading utilities

use crate::error::{BoardcheckError, Result};
use std::fs;
use std::path::Path;

/// Read a whole file, mapping into the crate error type.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(BoardcheckError::from)
}

/// Read the first line of a file, trimmed.
/// Meant for single-line pseudo-files like /proc/uptime, which the kernel
/// writes whole; one raw read is enough.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| BoardcheckError::Parse("path contains NUL".to_string()))?;

    unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            return Err(BoardcheckError::from(std::io::Error::last_os_error()));
        }

        let mut buffer = [0u8; 256];
        let bytes_read = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);

        if bytes_read < 0 {
            return Err(BoardcheckError::from(std::io::Error::last_os_error()));
        }

        if bytes_read == 0 {
            return Ok(String::new());
        }

        let content = std::str::from_utf8(&buffer[..bytes_read as usize])
            .map_err(|_| BoardcheckError::Parse("invalid UTF-8".to_string()))?;
        Ok(content.lines().next().unwrap_or("").trim().to_string())
    }
}

/// Check if a file exists safely
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}
