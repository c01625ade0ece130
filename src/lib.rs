//! Bone Run - terminal endless runner with a boredom timer.
//!
//! The simulation (`runner`), the countdown (`timer`) and the frame
//! scheduling (`driver`) know nothing about the terminal; `ui` draws
//! snapshots of them and `input` maps terminal events onto `app`.

pub mod app;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod driver;
pub mod input;
pub mod runner;
pub mod timer;
pub mod ui;
