//! Processing device designation.
//!
//! The search core never executes anything on a device itself. The tag is
//! handed to the initializer so that representations are created where the
//! problem's batched evaluation expects them.

use crate::error::SearchError;
use std::fmt;
use std::str::FromStr;

/// Where representations live and batched evaluation runs.
///
/// # Examples
///
/// ```
/// use u_isa::Device;
///
/// let dev: Device = "cuda:1".parse().unwrap();
/// assert_eq!(dev, Device::Cuda(1));
/// assert_eq!(dev.to_string(), "cuda:1");
/// assert_eq!(Device::default(), Device::Cpu);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Device {
    /// Host CPU.
    #[default]
    Cpu,
    /// CUDA device with the given ordinal.
    Cuda(u32),
}

impl Device {
    /// Returns `true` for accelerator devices.
    pub fn is_accelerator(&self) -> bool {
        !matches!(self, Device::Cpu)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda(idx) => write!(f, "cuda:{idx}"),
        }
    }
}

impl FromStr for Device {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        match tag.as_str() {
            "cpu" => Ok(Device::Cpu),
            "cuda" | "gpu" => Ok(Device::Cuda(0)),
            _ => tag
                .strip_prefix("cuda:")
                .and_then(|idx| idx.parse().ok())
                .map(Device::Cuda)
                .ok_or_else(|| SearchError::config(format!("unknown device tag `{s}`"))),
        }
    }
}
