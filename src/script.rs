//! Event scripts for driving a [`SketchState`] without an interactive host.
//!
//! A script is plain text with one command per line. Blank lines and lines
//! starting with `#` are ignored.
//!
//! ```text
//! # pointer events
//! down 10 10
//! move 20 20
//! up 30 10
//! leave
//!
//! # toolbar
//! undo | redo | clear | thin | thick | deselect
//! thickness 3.5
//! sticker 🐱
//! custom 🦀          # `custom` alone is a cancelled prompt
//! color red          # or: color 255 128 0
//! ```

use crate::draw::Color;
use crate::input::{Action, MouseButton, SketchState};
use crate::util;
use thiserror::Error;

/// A script line that could not be parsed.
#[derive(Debug, Error, PartialEq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

/// One host event replayed against a [`SketchState`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp { x: i32, y: i32 },
    PointerLeave,
    Action(Action),
    Thickness(f64),
    SelectSticker(String),
    /// Custom sticker prompt result; `None` when the prompt was left empty
    CustomSticker(Option<String>),
    Color(Color),
}

impl Command {
    /// Parses a single non-comment line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "down" => parse_point(rest).map(|(x, y)| Command::PointerDown { x, y }),
            "move" => parse_point(rest).map(|(x, y)| Command::PointerMove { x, y }),
            "up" => parse_point(rest).map(|(x, y)| Command::PointerUp { x, y }),
            "leave" => expect_no_args(keyword, rest).map(|_| Command::PointerLeave),
            "thickness" => rest
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Command::Thickness)
                .ok_or_else(|| format!("invalid thickness '{rest}'")),
            "sticker" => {
                if rest.is_empty() {
                    Err("sticker requires a glyph".to_string())
                } else {
                    Ok(Command::SelectSticker(rest.to_string()))
                }
            }
            "custom" => Ok(Command::CustomSticker(
                Some(rest.to_string()).filter(|text| !text.is_empty()),
            )),
            "color" => parse_color(rest).map(Command::Color),
            other => match Action::from_name(other) {
                Some(action) => expect_no_args(keyword, rest).map(|_| Command::Action(action)),
                None => Err(format!("unknown command '{keyword}'")),
            },
        }
    }

    /// Applies the command to a sketch state.
    pub fn apply(&self, state: &mut SketchState) {
        match self {
            Command::PointerDown { x, y } => state.on_mouse_press(MouseButton::Left, *x, *y),
            Command::PointerMove { x, y } => state.on_mouse_motion(*x, *y),
            Command::PointerUp { x, y } => state.on_mouse_release(MouseButton::Left, *x, *y),
            Command::PointerLeave => state.on_pointer_leave(),
            Command::Action(action) => state.handle_action(*action),
            Command::Thickness(value) => state.set_thickness(*value),
            Command::SelectSticker(glyph) => state.select_sticker(glyph),
            Command::CustomSticker(text) => {
                state.add_custom_sticker(text.as_deref().unwrap_or_default());
            }
            Command::Color(color) => state.set_color(*color),
        }
    }
}

/// Parses a whole script, stopping at the first invalid line.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            Command::parse(line).map_err(|message| ScriptError {
                line: index + 1,
                message,
            })
        })
        .collect()
}

fn expect_no_args(keyword: &str, rest: &str) -> Result<(), String> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(format!("'{keyword}' takes no arguments"))
    }
}

fn parse_point(args: &str) -> Result<(i32, i32), String> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [x, y] => {
            let x = x.parse::<i32>().map_err(|_| format!("invalid x coordinate '{x}'"))?;
            let y = y.parse::<i32>().map_err(|_| format!("invalid y coordinate '{y}'"))?;
            Ok((x, y))
        }
        _ => Err(format!("expected 'X Y', got '{args}'")),
    }
}

fn parse_color(args: &str) -> Result<Color, String> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [name] => util::name_to_color(name).ok_or_else(|| format!("unknown color '{name}'")),
        [r, g, b] => {
            let channel = |value: &str| {
                value
                    .parse::<u8>()
                    .map_err(|_| format!("invalid color channel '{value}'"))
            };
            Ok(Color::from_rgb8(channel(*r)?, channel(*g)?, channel(*b)?))
        }
        _ => Err(format!("expected a color name or 'R G B', got '{args}'")),
    }
}
