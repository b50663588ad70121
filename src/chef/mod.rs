//! Chef Assistant Module
//!
//! Stateless wrapper around a Gemini model that writes chef tips and answers
//! cooking questions. Nothing here is cached or retried.

mod client;
mod prompts;

pub use client::{
    ChefClient, ASK_EMPTY_REPLY, ASK_FAILURE_REPLY, TIPS_EMPTY_REPLY, TIPS_FAILURE_REPLY,
};
pub use prompts::{ask_prompt, chef_tips_prompt};
