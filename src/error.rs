use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    #[error("Decode error for {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Write error for {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type PadResult<T> = Result<T, PadError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_names_the_path() {
        let err = PadError::Decode {
            path: PathBuf::from("assets/missing.png"),
            source: image::ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "gone")),
        };
        let message = err.to_string();
        assert!(message.starts_with("Decode error for assets/missing.png"));
        assert!(message.contains("gone"));
    }

    #[test]
    fn test_write_error_keeps_codec_source() {
        use std::error::Error as _;

        let err = PadError::Write {
            path: PathBuf::from("out.png"),
            source: image::ImageError::IoError(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        };
        assert!(err.to_string().starts_with("Write error for out.png"));
        assert!(err.source().is_some());
    }
}
