//! Greedy chunked scheduling of periodic messages on a shared serial line.
//!
//! Messages with higher frequencies are placed first; lower-priority
//! messages are split into chunks that fill the free gaps left on the
//! timeline. An instance that cannot be fully placed within its period is
//! reported as an [`Overrun`] in the result rather than silently dropped.

use std::cmp::Ordering;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::budget::BITS_PER_BYTE;
use crate::error::ScheduleError;
use crate::id::MessageId;

/// Residual durations below this are treated as fully placed, absorbing
/// float rounding from the interval arithmetic.
const EPSILON_SECS: f64 = 1e-12;

/// A periodic message competing for the line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Message {
    /// Identity, unique within one scheduling run.
    pub id: MessageId,
    /// Payload size in bytes.
    pub size_bytes: u32,
    /// Transmission frequency in hertz. Must be finite and positive.
    pub frequency_hz: f64,
}

impl Message {
    /// Wire time of one full, un-chunked transmission in seconds.
    pub fn duration_secs(&self, baud_rate: u32) -> f64 {
        f64::from(self.size_bytes) * f64::from(BITS_PER_BYTE) / f64::from(baud_rate)
    }

    /// Interval between transmissions in seconds.
    pub fn period_secs(&self) -> f64 {
        1.0 / self.frequency_hz
    }
}

/// One scheduled transmission slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chunk {
    /// Start time in seconds from the beginning of the horizon.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// The message this slice belongs to.
    pub message: MessageId,
    /// Which occurrence of the message this slice serves (0-based).
    pub instance: u32,
}

impl Chunk {
    /// Duration of the slice in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }
}

/// An instance that could not be fully placed within its period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overrun {
    /// The message whose instance overran.
    pub message: MessageId,
    /// The affected occurrence (0-based).
    pub instance: u32,
    /// Transmission time that found no free gap, in seconds.
    pub missing_secs: f64,
}

/// Per-message placement summary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MessageStats {
    /// Number of chunks placed for the message.
    pub chunks: usize,
    /// Number of instances that received at least one chunk.
    pub instances: u32,
    /// Total scheduled wire time in seconds.
    pub scheduled_secs: f64,
}

/// The outcome of a scheduling run.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    /// All placed chunks, sorted by start time. Chunks never overlap.
    pub chunks: Vec<Chunk>,
    /// Instances that did not fit, in placement order.
    pub overruns: Vec<Overrun>,
}

impl Schedule {
    /// `true` when every instance was placed in full.
    pub fn is_feasible(&self) -> bool {
        self.overruns.is_empty()
    }

    /// Summarise placement per message, keyed in timeline order of each
    /// message's first chunk.
    pub fn per_message(&self) -> IndexMap<MessageId, MessageStats> {
        let mut stats: IndexMap<MessageId, MessageStats> = IndexMap::new();
        for chunk in &self.chunks {
            let entry = stats.entry(chunk.message).or_default();
            entry.chunks += 1;
            entry.scheduled_secs += chunk.duration_secs();
            entry.instances = entry.instances.max(chunk.instance + 1);
        }
        stats
    }
}

/// Lay out `messages` on a line of `baud_rate` over `[0, total_time_secs]`.
///
/// Placement order is frequency descending: the fastest messages get
/// contiguous slots at the start of each of their periods, and slower
/// messages are chunked into whatever gaps remain. Each instance of a
/// message must fit inside its own period window; time it cannot claim
/// there is recorded as an [`Overrun`].
pub fn schedule(
    messages: &[Message],
    total_time_secs: f64,
    baud_rate: u32,
) -> Result<Schedule, ScheduleError> {
    if baud_rate == 0 {
        return Err(ScheduleError::ZeroBaudRate);
    }
    for message in messages {
        if !message.frequency_hz.is_finite() || message.frequency_hz <= 0.0 {
            return Err(ScheduleError::NonPositiveFrequency {
                message: message.id,
                frequency_hz: message.frequency_hz,
            });
        }
    }

    let mut by_priority: Vec<&Message> = messages.iter().collect();
    by_priority.sort_by(|a, b| b.frequency_hz.total_cmp(&a.frequency_hz));

    // Busy timeline, kept sorted by start; entries never overlap.
    let mut busy: Vec<Chunk> = Vec::new();
    let mut overruns = Vec::new();

    for message in by_priority {
        let period = message.period_secs();
        let duration = message.duration_secs(baud_rate);
        let mut instance = 0u32;
        let mut window_start = 0.0f64;

        // The strict guard would admit a degenerate sliver window when
        // accumulated `+= period` rounding lands just short of the horizon;
        // windows shorter than the tolerance are not real instances.
        while window_start < total_time_secs - EPSILON_SECS {
            let window_end = (window_start + period).min(total_time_secs);
            let mut remaining = duration;

            for (free_start, free_end) in free_intervals(&busy, window_start, window_end) {
                let gap = free_end - free_start;
                if gap <= 0.0 {
                    continue;
                }
                let take = remaining.min(gap);
                insert_sorted(
                    &mut busy,
                    Chunk {
                        start: free_start,
                        end: free_start + take,
                        message: message.id,
                        instance,
                    },
                );
                remaining -= take;
                if remaining <= EPSILON_SECS {
                    break;
                }
            }

            if remaining > EPSILON_SECS {
                overruns.push(Overrun {
                    message: message.id,
                    instance,
                    missing_secs: remaining,
                });
            }
            instance += 1;
            window_start += period;
        }
    }

    Ok(Schedule {
        chunks: busy,
        overruns,
    })
}

/// Free gaps within `[window_start, window_end]`, given a sorted,
/// non-overlapping busy list.
fn free_intervals(busy: &[Chunk], window_start: f64, window_end: f64) -> SmallVec<[(f64, f64); 4]> {
    let mut free = SmallVec::new();
    let mut cursor = window_start;
    for chunk in busy {
        if chunk.end <= window_start {
            continue;
        }
        if chunk.start >= window_end {
            break;
        }
        if chunk.start > cursor {
            free.push((cursor, chunk.start.min(window_end)));
        }
        cursor = cursor.max(chunk.end);
        if cursor >= window_end {
            break;
        }
    }
    if cursor < window_end {
        free.push((cursor, window_end));
    }
    free
}

/// Insert a chunk keeping the busy list sorted by start time.
fn insert_sorted(busy: &mut Vec<Chunk>, chunk: Chunk) {
    let at = busy.partition_point(|c| c.start.total_cmp(&chunk.start) != Ordering::Greater);
    busy.insert(at, chunk);
}
