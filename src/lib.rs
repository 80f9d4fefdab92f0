//! A small NES Zelda-style overworld: title sequence, save slot menus and a
//! player walking across fixed-size map regions.

pub mod config;
pub mod entities;
pub mod events;
pub mod map;
pub mod menu;
pub mod save;
pub mod screen;
pub mod state;
pub mod tiles;
pub mod title;
