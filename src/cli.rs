use crate::app::RippleApp;
use crate::config::parse_argb;
use crate::ripple::RippleStyle;
use clap::{Parser, Subcommand};
use eframe::egui;
use tracing::info;

/// Console commands for the ripple viewer.
#[derive(Parser, Debug)]
#[command(name = "ripple", no_binary_name(true), version, about, long_about = None, disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show help for commands.
    #[command(alias = "h")]
    Help,
    /// Start the ripple animation (restarts if already running).
    Start,
    /// Stop the ripple animation.
    Stop,
    /// Set a configuration value.
    Set {
        #[command(subcommand)]
        command: SetCommands,
    },
    /// Rebuild the widget from the loaded configuration.
    Reset,
    /// Clear console history.
    Clear,
    /// Quit the application.
    #[command(alias = "q")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum SetCommands {
    /// Set the ripple style.
    Style {
        /// Ripple style to set ("stroke" or "fill").
        #[arg(value_parser = ["stroke", "fill"])]
        style: String,
    },
    /// Set the ripple color.
    Color {
        /// New color as packed AARRGGBB hex, e.g. "33000000".
        color: String,
    },
    /// Set the stroke width range.
    Stroke {
        /// Stroke width at the start of a ring's life.
        min: f32,
        /// Stroke width at the end of a ring's life.
        max: f32,
    },
    /// Set the radius range.
    Radius {
        /// Radius at the start of a ring's life.
        min: f32,
        /// Radius at the end of a ring's life.
        max: f32,
    },
}

pub fn handle_command(app: &mut RippleApp, ctx: &egui::Context, cli: Cli) {
    match cli.command {
        Commands::Help => {
            app.command_history.push("Available commands:".to_string());
            app.command_history.push("  help                         - Show this help message".to_string());
            app.command_history.push("  start                        - Start the ripple animation".to_string());
            app.command_history.push("  stop                         - Stop the ripple animation".to_string());
            app.command_history.push("  set style <stroke|fill>      - Set the ripple style".to_string());
            app.command_history.push("  set color <AARRGGBB>         - Set the ripple color".to_string());
            app.command_history.push("  set stroke <min> <max>       - Set the stroke width range".to_string());
            app.command_history.push("  set radius <min> <max>       - Set the radius range".to_string());
            app.command_history.push("  reset                        - Rebuild the widget from config".to_string());
            app.command_history.push("  quit (or q)                  - Quit the application".to_string());
            app.command_history.push("  clear                        - Clear console history (or Ctrl+L/Cmd+L)".to_string());
        }
        Commands::Start => {
            let now = ctx.input(|i| i.time);
            app.ripple.start(now);
            info!("ripple animation started");
            app.command_history.push("Ripple animation started.".to_string());
        }
        Commands::Stop => {
            app.ripple.stop();
            info!("ripple animation stopped");
            app.command_history.push("Ripple animation stopped.".to_string());
            ctx.request_repaint();
        }
        Commands::Reset => {
            app.ripple = app.config.ripple_field();
            app.command_history
                .push("Ripple widget rebuilt from configuration.".to_string());
            ctx.request_repaint();
        }
        Commands::Quit => {
            app.command_history.push("Exiting application...".to_string());
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        Commands::Clear => {
            app.command_history.clear();
        }
        Commands::Set { command } => match command {
            SetCommands::Style { style } => match style.as_str() {
                "stroke" => {
                    app.ripple.set_style(RippleStyle::Stroke);
                    app.command_history.push("Ripple style set to Stroke.".to_string());
                }
                "fill" => {
                    app.ripple.set_style(RippleStyle::Fill);
                    app.command_history.push("Ripple style set to Fill.".to_string());
                }
                _ => {
                    app.command_history.push(format!(
                        "ERROR: Unknown style: '{}'. Use 'stroke' or 'fill'.",
                        style
                    ));
                }
            },
            SetCommands::Color { color } => match parse_argb(&color) {
                Some(argb) => {
                    app.ripple.set_ripple_color(argb);
                    app.command_history
                        .push(format!("Ripple color set to {:08X}.", argb));
                }
                None => {
                    app.command_history.push(format!(
                        "ERROR: Invalid color: '{}'. Expected 8 hex digits (AARRGGBB).",
                        color
                    ));
                }
            },
            SetCommands::Stroke { min, max } => {
                app.ripple.set_min_stroke_width(min);
                app.ripple.set_max_stroke_width(max);
                app.command_history
                    .push(format!("Stroke width range set to {} .. {}.", min, max));
            }
            SetCommands::Radius { min, max } => {
                app.ripple.set_min_radius(min);
                app.ripple.set_max_radius(max);
                app.command_history
                    .push(format!("Radius range set to {} .. {}.", min, max));
                app.command_history.push(
                    "NOTE: Radius bounds are recomputed when the view is resized.".to_string(),
                );
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_start_and_stop() {
        assert!(matches!(
            Cli::try_parse_from(["start"]).unwrap().command,
            Commands::Start
        ));
        assert!(matches!(
            Cli::try_parse_from(["stop"]).unwrap().command,
            Commands::Stop
        ));
    }

    #[test]
    fn test_quit_alias() {
        assert!(matches!(
            Cli::try_parse_from(["q"]).unwrap().command,
            Commands::Quit
        ));
    }

    #[test]
    fn test_parses_set_style() {
        let cli = Cli::try_parse_from(["set", "style", "fill"]).unwrap();
        match cli.command {
            Commands::Set {
                command: SetCommands::Style { style },
            } => assert_eq!(style, "fill"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["set", "style", "dotted"]).is_err());
    }

    #[test]
    fn test_parses_set_radius() {
        let cli = Cli::try_parse_from(["set", "radius", "0", "250.5"]).unwrap();
        match cli.command {
            Commands::Set {
                command: SetCommands::Radius { min, max },
            } => {
                assert_eq!(min, 0.0);
                assert_eq!(max, 250.5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["explode"]).is_err());
    }
}
