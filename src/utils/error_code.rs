//! Error codes shared across subsystems, mapped from OS errors

use std::fmt;
use std::io;

/// A subsystem-independent error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Ok,
    Range,
    MmapFailed,
    FailedToCreateSocket,
    FailedToOpenPcm,
    AlsaFailure,
    NoAlsaCapture,
    NoAlsaPlayback,
    HostnameResolveFailed,
    BadProtocol,
    InvalidSdp,
    ConnectionRefused,
    BadArgument,
    PermissionDenied,
    Unknown,
    Interrupted,
    BadFileDescriptor,
    NotReady,
    Busy,
    NoSpaceLeftOnDevice,
    SrtpFailedToInit,
}

impl ErrorCode {
    /// Map an `errno` value; values without a dedicated code become [`ErrorCode::Unknown`]
    ///
    /// ```
    /// use slogger::utils::ErrorCode;
    /// assert_eq!(ErrorCode::from_errno(libc::EBUSY), ErrorCode::Busy);
    /// assert_eq!(ErrorCode::from_errno(0), ErrorCode::Ok);
    /// ```
    pub fn from_errno(errno: i32) -> Self {
        match errno {
            0 => Self::Ok,
            libc::ERANGE => Self::Range,
            libc::EPERM | libc::EACCES => Self::PermissionDenied,
            libc::EINTR => Self::Interrupted,
            libc::EBADF => Self::BadFileDescriptor,
            libc::EAGAIN => Self::NotReady,
            libc::EBUSY => Self::Busy,
            libc::ENOSPC => Self::NoSpaceLeftOnDevice,
            libc::EINVAL => Self::BadArgument,
            libc::ECONNREFUSED => Self::ConnectionRefused,
            libc::EPROTO => Self::BadProtocol,
            _ => Self::Unknown,
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == Self::Ok
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Range => "RANGE",
            Self::MmapFailed => "MMAP_FAILED",
            Self::FailedToCreateSocket => "FAILED_TO_CREATE_SOCKET",
            Self::FailedToOpenPcm => "FAILED_TO_OPEN_PCM",
            Self::AlsaFailure => "ALSA_FAILURE",
            Self::NoAlsaCapture => "NO_ALSA_CAPTURE",
            Self::NoAlsaPlayback => "NO_ALSA_PLAYBACK",
            Self::HostnameResolveFailed => "HOSTNAME_RESOLVE_FAILED",
            Self::BadProtocol => "BAD_PROTOCOL",
            Self::InvalidSdp => "INVALID_SDP",
            Self::ConnectionRefused => "CONNECTION_REFUSED",
            Self::BadArgument => "BAD_ARGUMENT",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::Unknown => "UNKNOWN",
            Self::Interrupted => "INTERRUPTED",
            Self::BadFileDescriptor => "BAD_FILE_DESCRIPTOR",
            Self::NotReady => "NOT_READY",
            Self::Busy => "BUSY",
            Self::NoSpaceLeftOnDevice => "NO_SPACE_LEFT_ON_DEVICE",
            Self::SrtpFailedToInit => "SRTP_FAILED_TO_INIT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&io::Error> for ErrorCode {
    fn from(err: &io::Error) -> Self {
        if let Some(errno) = err.raw_os_error() {
            return Self::from_errno(errno);
        }
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::Interrupted => Self::Interrupted,
            io::ErrorKind::ConnectionRefused => Self::ConnectionRefused,
            io::ErrorKind::WouldBlock => Self::NotReady,
            io::ErrorKind::InvalidInput => Self::BadArgument,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_errno() {
        assert_eq!(ErrorCode::from_errno(0), ErrorCode::Ok);
        assert_eq!(ErrorCode::from_errno(libc::ERANGE), ErrorCode::Range);
        assert_eq!(ErrorCode::from_errno(libc::EPERM), ErrorCode::PermissionDenied);
        assert_eq!(ErrorCode::from_errno(libc::EACCES), ErrorCode::PermissionDenied);
        assert_eq!(ErrorCode::from_errno(libc::EINTR), ErrorCode::Interrupted);
        assert_eq!(ErrorCode::from_errno(libc::EBADF), ErrorCode::BadFileDescriptor);
        assert_eq!(ErrorCode::from_errno(libc::EAGAIN), ErrorCode::NotReady);
        assert_eq!(ErrorCode::from_errno(libc::ENOSPC), ErrorCode::NoSpaceLeftOnDevice);
        assert_eq!(ErrorCode::from_errno(libc::EINVAL), ErrorCode::BadArgument);
        assert_eq!(ErrorCode::from_errno(libc::ENOENT), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_errno(-1), ErrorCode::Unknown);
    }

    #[test]
    fn test_from_io_error() {
        let os = io::Error::from_raw_os_error(libc::ECONNREFUSED);
        assert_eq!(ErrorCode::from(&os), ErrorCode::ConnectionRefused);

        let custom = io::Error::new(io::ErrorKind::WouldBlock, "later");
        assert_eq!(ErrorCode::from(&custom), ErrorCode::NotReady);

        let other = io::Error::new(io::ErrorKind::Other, "?");
        assert_eq!(ErrorCode::from(&other), ErrorCode::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NoSpaceLeftOnDevice.to_string(), "NO_SPACE_LEFT_ON_DEVICE");
        assert_eq!(ErrorCode::Ok.to_string(), "OK");
        assert!(ErrorCode::Ok.is_ok());
        assert!(!ErrorCode::Busy.is_ok());
    }
}
