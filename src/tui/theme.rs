// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Waypoint-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Waypoint and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

use crate::model::NodeKind;
use crate::session::NodeMark;

pub(crate) const PALETTE_ENV: &str = "WAYPOINT_PALETTE";

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        match env::var(PALETTE_ENV) {
            Ok(value) => Self::from_palette_value(&value),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ThemeError::InvalidEnv {
                name: PALETTE_ENV.to_owned(),
                value: "<non-unicode>".to_owned(),
            }),
        }
    }

    pub(crate) fn from_palette_value(value: &str) -> Result<Self, ThemeError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let palette = TuiPalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_owned(),
            value: format!("{trimmed} ({error})"),
        })?;
        Ok(Self { palette: Some(palette) })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn role_color(&self, role: Role) -> Color {
        match &self.palette {
            Some(palette) => palette.role_color(role),
            None => role.default_color(),
        }
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(Color::Yellow)
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.role_color(Role::Destination))
    }

    pub(crate) fn dim_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::DIM)
    }

    pub(crate) fn kind_style(&self, kind: NodeKind) -> Style {
        let role = match kind {
            NodeKind::Room => Role::Room,
            NodeKind::Stairs => Role::Stairs,
        };
        self.base_style().fg(self.role_color(role))
    }

    /// Chip style for a node: route progress wins over the node kind.
    pub(crate) fn node_style(&self, kind: NodeKind, mark: NodeMark) -> Style {
        let role = match mark {
            NodeMark::Off => return self.kind_style(kind),
            NodeMark::OnRoute => {
                return self.kind_style(kind).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            }
            NodeMark::Visited => Role::Visited,
            NodeMark::Current => Role::Current,
            NodeMark::Destination => Role::Destination,
        };
        self.base_style()
            .fg(Color::Black)
            .bg(self.role_color(role))
            .add_modifier(Modifier::BOLD)
    }

    /// Foreground-only variant of [`Self::node_style`] for the route strip.
    pub(crate) fn route_mark_style(&self, mark: NodeMark) -> Style {
        match mark {
            NodeMark::Off | NodeMark::OnRoute => self.base_style(),
            NodeMark::Visited => self.base_style().fg(self.role_color(Role::Visited)),
            NodeMark::Current => {
                self.base_style().fg(self.role_color(Role::Current)).add_modifier(Modifier::BOLD)
            }
            NodeMark::Destination => self
                .base_style()
                .fg(self.role_color(Role::Destination))
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Room,
    Stairs,
    Visited,
    Current,
    Destination,
}

impl Role {
    const fn idx(self) -> usize {
        match self {
            Self::Room => 0,
            Self::Stairs => 1,
            Self::Visited => 2,
            Self::Current => 3,
            Self::Destination => 4,
        }
    }

    fn default_color(self) -> Color {
        match self {
            Self::Room => Color::Cyan,
            Self::Stairs => Color::LightGreen,
            Self::Visited => Color::Green,
            Self::Current => Color::Blue,
            Self::Destination => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    roles: [Color; 5],
}

impl TuiPalette {
    const CSV_LEN: usize = 7;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg,room,stairs,visited,current,destination), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_hex_color(parts[0])?;
        let bg = parse_hex_color(parts[1])?;
        let mut roles = [Color::Reset; 5];
        for (idx, part) in parts.iter().skip(2).enumerate() {
            roles[idx] = parse_hex_color(part)?;
        }

        Ok(Self { fg, bg, roles })
    }

    fn role_color(&self, role: Role) -> Color {
        self.roles[role.idx()]
    }
}

fn parse_hex_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb(((rgb >> 16) & 0xFF) as u8, ((rgb >> 8) & 0xFF) as u8, (rgb & 0xFF) as u8))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
}
