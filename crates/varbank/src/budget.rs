//! Serial link budget assessment.
//!
//! Answers "does this variable set fit on the wire": given a line rate and
//! groups of variables sent at different frequencies, compute the total
//! bit rate and utilisation percentage, including per-variable and
//! per-group framing overheads.

use crate::error::BudgetError;
use crate::value::VAR_SIZE;

/// Baud rates commonly supported by UART hardware.
pub const COMMON_BAUD_RATES: [u32; 8] = [
    9600, 19200, 38400, 57600, 115200, 230400, 460800, 921600,
];

/// Wire bits per payload byte: one start bit, eight data bits, one stop bit.
pub const BITS_PER_BYTE: u32 = 10;

/// A group of variables sent at a common frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateGroup {
    /// Number of 4-byte variables in the group.
    pub vars: u32,
    /// How often the group is transmitted, in hertz.
    pub frequency_hz: u32,
}

/// Link parameters for bandwidth assessment.
///
/// Overheads model framing bytes added by the transport:
/// `overhead_per_group` is paid once per group transmission (header,
/// checksum), `overhead_per_variable` once per variable (id tag).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkBudget {
    /// Line rate in bits per second.
    pub baud_rate: u32,
    /// Framing bytes added per variable.
    pub overhead_per_variable: u32,
    /// Framing bytes added per group transmission.
    pub overhead_per_group: u32,
}

impl LinkBudget {
    /// Create a budget with no framing overheads.
    pub fn new(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            overhead_per_variable: 0,
            overhead_per_group: 0,
        }
    }

    /// Assess the bandwidth consumed by `groups`.
    pub fn assess(&self, groups: &[RateGroup]) -> Result<BandwidthReport, BudgetError> {
        if self.baud_rate == 0 {
            return Err(BudgetError::ZeroBaudRate);
        }
        let mut bytes_per_second: u64 = 0;
        for group in groups {
            let vars = u64::from(group.vars);
            let per_send = vars * VAR_SIZE as u64
                + u64::from(self.overhead_per_group)
                + u64::from(self.overhead_per_variable) * vars;
            bytes_per_second += per_send * u64::from(group.frequency_hz);
        }
        let bits_per_second = bytes_per_second * u64::from(BITS_PER_BYTE);
        let utilisation_percent = bits_per_second as f64 / f64::from(self.baud_rate) * 100.0;
        Ok(BandwidthReport {
            bits_per_second,
            utilisation_percent,
        })
    }
}

/// Outcome of a budget assessment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandwidthReport {
    /// Total wire bits per second consumed by all groups.
    pub bits_per_second: u64,
    /// Consumed bits as a percentage of the line rate.
    pub utilisation_percent: f64,
}

impl BandwidthReport {
    /// `true` if the groups need more bandwidth than the line provides.
    pub fn is_saturated(&self) -> bool {
        self.utilisation_percent > 100.0
    }
}
