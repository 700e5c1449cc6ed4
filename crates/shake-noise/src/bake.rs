//! Baking shakes into per-frame keys.
//!
//! [`BakeDriver`] walks a [`TimeRange`] in increasing time order and, for
//! every channel with a bound shake, writes `base + offset(t)`. Channels
//! without a shake are never written and keep their base value.
//!
//! The base pose is read once, before the first frame. In a host the
//! control being keyed is also where the base pose lives; re-reading it
//! mid-bake would add noise on top of already-baked noise.
//!
//! # Example
//!
//! ```rust
//! use shake_core::{Channel, NoiseParameters, Pose, ShakeSet, TimeRange};
//! use shake_noise::{BakeDriver, Keyframe};
//!
//! let shakes = ShakeSet::default().with(Channel::Rotate, NoiseParameters::with_seed(3));
//! let range = TimeRange::new(1.0, 24.0, 1).unwrap();
//! let driver = BakeDriver::from_range(range, &shakes).unwrap();
//!
//! let mut keys: Vec<Keyframe> = Vec::new();
//! let written = driver.bake_into(&Pose::IDENTITY, &mut keys);
//! assert_eq!(written, 24);
//! assert!(keys.iter().all(|k| k.channel == Channel::Rotate));
//! ```

use crate::sampler::NoiseSampler;
use glam::DVec3;
use serde::Serialize;
use shake_core::{Channel, Error, Pose, Result, ShakeSet, TimeRange, TimeWindow};
use tracing::{debug, trace};

/// Destination of baked keys.
///
/// A host implements this over its animation curves. Calls arrive in
/// non-decreasing time order, at most once per channel per time.
pub trait KeyframeSink {
    /// Sets the key of `channel` at `time`.
    fn set_key(&mut self, time: f64, channel: Channel, value: DVec3);
}

/// A single baked key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keyframe {
    /// Key time.
    pub time: f64,
    /// Keyed channel.
    pub channel: Channel,
    /// Keyed value.
    pub value: DVec3,
}

impl KeyframeSink for Vec<Keyframe> {
    fn set_key(&mut self, time: f64, channel: Channel, value: DVec3) {
        self.push(Keyframe {
            time,
            channel,
            value,
        });
    }
}

/// Full pose at one baked time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BakedFrame {
    /// Frame time.
    pub time: f64,
    /// Base pose with the bound shakes applied.
    pub pose: Pose,
}

/// Sequential bake over a time range.
#[derive(Debug, Clone)]
pub struct BakeDriver {
    range: TimeRange,
    samplers: [Option<NoiseSampler>; 3],
}

impl BakeDriver {
    /// Prepares a bake of `shakes` over `range`, with envelopes anchored
    /// to the animation `window`.
    ///
    /// Every bound shake is validated here, so a bake either writes all
    /// of its keys or none.
    ///
    /// # Errors
    ///
    /// [`shake_core::Error::InvalidParameter`] for a non-positive step, an
    /// inverted range or window, a range with more keys than can be
    /// counted, or invalid shake parameters.
    pub fn new(range: TimeRange, window: TimeWindow, shakes: &ShakeSet) -> Result<Self> {
        range.validate()?;
        let mut samplers = [None; 3];
        let mut bound = 0;
        for (channel, params) in shakes.bound() {
            samplers[channel.index()] = Some(NoiseSampler::new(params, window)?);
            bound += 1;
        }
        if range.len().checked_mul(bound).is_none() {
            return Err(Error::invalid_parameter(
                "end",
                format!("too many keys for {bound} channels"),
            ));
        }
        Ok(Self { range, samplers })
    }

    /// Like [`BakeDriver::new`] with the envelope anchored to the bake range.
    pub fn from_range(range: TimeRange, shakes: &ShakeSet) -> Result<Self> {
        Self::new(range, range.window(), shakes)
    }

    /// Range being baked.
    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Channels that receive keys, in write order.
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.bound().map(|(channel, _)| channel)
    }

    fn bound(&self) -> impl Iterator<Item = (Channel, &NoiseSampler)> + '_ {
        Channel::ALL.into_iter().filter_map(move |channel| {
            self.samplers[channel.index()]
                .as_ref()
                .map(|s| (channel, s))
        })
    }

    /// Keys a full bake will write.
    pub fn key_count(&self) -> usize {
        self.range.len() * self.channels().count()
    }

    /// Writes keys for every bound channel at every time of the range.
    ///
    /// Returns the number of keys written.
    pub fn bake_into<S>(&self, base: &Pose, sink: &mut S) -> usize
    where
        S: KeyframeSink + ?Sized,
    {
        let channels: Vec<Channel> = self.channels().collect();
        if channels.is_empty() {
            debug!("no shakes bound, nothing to bake");
            return 0;
        }
        debug!(
            start = self.range.start,
            end = self.range.end,
            step = self.range.step,
            ?channels,
            "baking shakes"
        );

        let mut written = 0;
        for time in self.range.frames() {
            for (channel, sampler) in self.bound() {
                let value = base.channel(channel) + sampler.sample(time);
                trace!(time, %channel, ?value, "key");
                sink.set_key(time, channel, value);
                written += 1;
            }
        }

        debug!(written, "bake finished");
        written
    }

    /// Evaluates the full pose at every time of the range.
    ///
    /// Unbound channels carry the base value on every frame.
    pub fn bake(&self, base: &Pose) -> Vec<BakedFrame> {
        self.range
            .frames()
            .map(|time| BakedFrame {
                time,
                pose: self.pose_at(base, time),
            })
            .collect()
    }

    /// Base pose with the bound shakes applied at `time`.
    pub fn pose_at(&self, base: &Pose, time: f64) -> Pose {
        self.bound()
            .fold(*base, |pose, (channel, sampler)| pose.offset(channel, sampler.sample(time)))
    }
}
