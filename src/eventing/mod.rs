//! Eventing - Service → UI Event Types

pub mod app_event;
