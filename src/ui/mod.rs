// SPDX-License-Identifier: MPL-2.0
//! UI components and styling.

pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod notice;
pub mod styles;
