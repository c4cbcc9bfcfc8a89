//! Automatically attach an emoji reaction to new messages in configured
//! Discord channels, subject to a per-user blacklist.

pub mod adapters;
pub mod params;
pub mod reactor;
