use std::fmt::Display;

use cliclack::{intro as cliclack_intro, log, outro as cliclack_outro};
use console::style;
use serde::Serialize;

pub fn intro() {
    cliclack_intro(style(" BatchTx CLI ").on_cyan().black()).ok();
}

pub fn outro(msg: impl Display) {
    cliclack_outro(msg).ok();
}

pub fn info(msg: impl Display) {
    log::info(msg).ok();
}

pub fn success(msg: impl Display) {
    log::success(msg).ok();
}

pub fn warn(msg: impl Display) {
    log::warning(msg).ok();
}

pub fn error(msg: impl Display) {
    log::error(style(msg).red()).ok();
}

pub fn step(msg: impl Display) {
    log::step(msg).ok();
}

pub fn new_empty_line() {
    println!();
}

pub fn object_to_string(o: impl Serialize) -> String {
    serde_json::to_string_pretty(&o).unwrap_or_else(|err| format!("<unserializable: {err}>"))
}
