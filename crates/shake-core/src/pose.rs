//! Transform poses and per-channel shake bindings.
//!
//! A host control carries a translate/rotate/scale [`Pose`]. A shake is
//! bound to at most one [`Channel`] of that pose, and a control can carry
//! one shake per channel, collected in a [`ShakeSet`].

use crate::params::NoiseParameters;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Transform channel a shake drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Translation.
    Translate,
    /// Euler rotation.
    Rotate,
    /// Per-axis scale.
    Scale,
}

impl Channel {
    /// All channels in write order.
    pub const ALL: [Channel; 3] = [Channel::Translate, Channel::Rotate, Channel::Scale];

    /// Position in [`Channel::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Translate => 0,
            Channel::Rotate => 1,
            Channel::Scale => 2,
        }
    }

    /// Lower-case channel name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Translate => "translate",
            Channel::Rotate => "rotate",
            Channel::Scale => "scale",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Translate, rotate and scale of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    /// Translation.
    pub translate: DVec3,
    /// Euler rotation.
    pub rotate: DVec3,
    /// Scale.
    pub scale: DVec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Zero translation and rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translate: DVec3::ZERO,
        rotate: DVec3::ZERO,
        scale: DVec3::ONE,
    };

    /// Creates a pose from its three channels.
    pub fn new(translate: DVec3, rotate: DVec3, scale: DVec3) -> Self {
        Self {
            translate,
            rotate,
            scale,
        }
    }

    /// Value of one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> DVec3 {
        match channel {
            Channel::Translate => self.translate,
            Channel::Rotate => self.rotate,
            Channel::Scale => self.scale,
        }
    }

    /// Overwrites one channel.
    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: DVec3) {
        match channel {
            Channel::Translate => self.translate = value,
            Channel::Rotate => self.rotate = value,
            Channel::Scale => self.scale = value,
        }
    }

    /// Adds an offset to one channel, the way a compose-transform node
    /// sums a base pose with noise.
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use shake_core::{Channel, Pose};
    ///
    /// let pose = Pose::IDENTITY.offset(Channel::Scale, DVec3::splat(0.5));
    /// assert_eq!(pose.scale, DVec3::splat(1.5));
    /// ```
    #[must_use]
    pub fn offset(mut self, channel: Channel, delta: DVec3) -> Self {
        let value = self.channel(channel) + delta;
        self.set_channel(channel, value);
        self
    }
}

/// Shakes bound to the channels of one control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeSet {
    /// Shake driving translation.
    pub translate: Option<NoiseParameters>,
    /// Shake driving rotation.
    pub rotate: Option<NoiseParameters>,
    /// Shake driving scale.
    pub scale: Option<NoiseParameters>,
}

impl ShakeSet {
    /// Shake bound to `channel`, if any.
    #[inline]
    pub fn get(&self, channel: Channel) -> Option<&NoiseParameters> {
        match channel {
            Channel::Translate => self.translate.as_ref(),
            Channel::Rotate => self.rotate.as_ref(),
            Channel::Scale => self.scale.as_ref(),
        }
    }

    /// Binds or unbinds a shake on `channel`.
    pub fn set(&mut self, channel: Channel, params: Option<NoiseParameters>) {
        match channel {
            Channel::Translate => self.translate = params,
            Channel::Rotate => self.rotate = params,
            Channel::Scale => self.scale = params,
        }
    }

    /// Builder form of [`ShakeSet::set`].
    #[must_use]
    pub fn with(mut self, channel: Channel, params: NoiseParameters) -> Self {
        self.set(channel, Some(params));
        self
    }

    /// Bound channels with their parameters, in write order.
    pub fn bound(&self) -> impl Iterator<Item = (Channel, &NoiseParameters)> {
        Channel::ALL
            .into_iter()
            .filter_map(move |channel| self.get(channel).map(|params| (channel, params)))
    }

    /// True when no channel carries a shake.
    pub fn is_empty(&self) -> bool {
        self.bound().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pose() {
        let pose = Pose::default();
        assert_eq!(pose.translate, DVec3::ZERO);
        assert_eq!(pose.scale, DVec3::ONE);
    }

    #[test]
    fn test_channel_access() {
        let mut pose = Pose::IDENTITY;
        pose.set_channel(Channel::Rotate, DVec3::new(0.0, 90.0, 0.0));
        assert_eq!(pose.channel(Channel::Rotate).y, 90.0);
        let moved = pose.offset(Channel::Translate, DVec3::X);
        assert_eq!(moved.translate, DVec3::X);
        assert_eq!(moved.rotate, pose.rotate);
    }

    #[test]
    fn test_shake_set_bound_order() {
        let set = ShakeSet::default()
            .with(Channel::Scale, NoiseParameters::with_seed(3))
            .with(Channel::Translate, NoiseParameters::with_seed(1));
        let channels: Vec<Channel> = set.bound().map(|(c, _)| c).collect();
        assert_eq!(channels, vec![Channel::Translate, Channel::Scale]);
        assert_eq!(set.get(Channel::Scale).map(|p| p.seed), Some(3));
        assert!(set.get(Channel::Rotate).is_none());
    }

    #[test]
    fn test_shake_set_empty() {
        let mut set = ShakeSet::default();
        assert!(set.is_empty());
        set.set(Channel::Rotate, Some(NoiseParameters::default()));
        assert!(!set.is_empty());
        set.set(Channel::Rotate, None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Translate.to_string(), "translate");
    }
}
