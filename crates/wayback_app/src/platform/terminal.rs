//! A one-line infobar drawn on a terminal, with commands read from stdin.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use crossterm::style::{self, Stylize};
use engine_logging::{engine_debug, engine_warn};
use wayback_core::Color;

use super::host::InfobarContainer;
use super::resources::ImageId;
use super::ui::constants::BUTTON_CHECK;
use super::ui::{AppEvent, ControlId, PlatformCommand};

const HELP: &str = "commands: check | close | theme | quit";

#[derive(Debug, Clone)]
enum ControlKind {
    Image(ImageId),
    Separator,
    Label { text: String, bold: bool },
    Spacer,
    Button { text: String },
}

#[derive(Debug, Clone)]
struct Control {
    kind: ControlKind,
    visible: bool,
    enabled: bool,
    background: Option<Color>,
    foreground: Option<Color>,
}

impl Control {
    fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            visible: true,
            enabled: true,
            background: None,
            foreground: None,
        }
    }
}

pub struct TerminalPlatform<W: Write> {
    out: W,
    ansi: bool,
    controls: BTreeMap<ControlId, Control>,
    order: Vec<ControlId>,
    removed: bool,
}

impl<W: Write> TerminalPlatform<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self {
            out,
            ansi,
            controls: BTreeMap::new(),
            order: Vec::new(),
            removed: false,
        }
    }

    fn create(&mut self, control_id: ControlId, kind: ControlKind) {
        self.order.push(control_id);
        self.controls.insert(control_id, Control::new(kind));
    }

    fn with_control(&mut self, control_id: ControlId, f: impl FnOnce(&mut Control)) {
        match self.controls.get_mut(&control_id) {
            Some(control) => f(control),
            None => engine_warn!("command for unknown control {:?}", control_id),
        }
    }

    fn execute(&mut self, command: PlatformCommand) {
        match command {
            PlatformCommand::CreateImage {
                control_id,
                image,
                background,
                ..
            } => {
                self.create(control_id, ControlKind::Image(image));
                self.with_control(control_id, |control| control.background = background);
            }
            PlatformCommand::CreateSeparator { control_id } => {
                self.create(control_id, ControlKind::Separator);
            }
            PlatformCommand::CreateLabel {
                control_id,
                text,
                bold,
                ..
            } => self.create(control_id, ControlKind::Label { text, bold }),
            PlatformCommand::CreateSpacer { control_id } => {
                self.create(control_id, ControlKind::Spacer);
            }
            PlatformCommand::CreateButton { control_id, text } => {
                self.create(control_id, ControlKind::Button { text });
            }
            PlatformCommand::DefineLayout { rules } => {
                self.order = rules.into_iter().map(|rule| rule.control_id).collect();
            }
            PlatformCommand::SetControlVisible {
                control_id,
                visible,
            } => self.with_control(control_id, |control| control.visible = visible),
            PlatformCommand::SetControlEnabled {
                control_id,
                enabled,
            } => self.with_control(control_id, |control| control.enabled = enabled),
            PlatformCommand::SetLabelColors {
                control_id,
                background,
                text,
            } => self.with_control(control_id, |control| {
                control.background = Some(background);
                control.foreground = Some(text);
            }),
            PlatformCommand::SetSeparatorColor { control_id, color } => {
                self.with_control(control_id, |control| control.foreground = Some(color))
            }
        }
    }

    /// The bar as one line of text, visible controls only.
    fn draw_line(&self) -> String {
        let parts: Vec<String> = self
            .order
            .iter()
            .filter_map(|id| self.controls.get(id))
            .filter(|control| control.visible)
            .filter_map(|control| {
                let (text, bold) = match &control.kind {
                    ControlKind::Image(image) => (image.alt_text().to_string(), false),
                    ControlKind::Separator => ("|".to_string(), false),
                    ControlKind::Label { text, bold } => (text.clone(), *bold),
                    ControlKind::Spacer => return None,
                    ControlKind::Button { text } if control.enabled => (format!("[ {text} ]"), false),
                    ControlKind::Button { text } => (format!("[ {text}... ]"), false),
                };
                Some(self.paint(text, control, bold))
            })
            .collect();
        parts.join(" ")
    }

    fn paint(&self, text: String, control: &Control, bold: bool) -> String {
        if !self.ansi {
            return text;
        }
        let mut styled = text.stylize();
        if let Some(color) = control.foreground {
            styled = styled.with(term_color(color));
        }
        if let Some(color) = control.background {
            styled = styled.on(term_color(color));
        }
        if bold {
            styled = styled.bold();
        }
        styled.to_string()
    }

    fn redraw(&mut self) -> io::Result<()> {
        let line = self.draw_line();
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

impl<W: Write> InfobarContainer for TerminalPlatform<W> {
    fn apply(&mut self, commands: Vec<PlatformCommand>) {
        if self.removed || commands.is_empty() {
            return;
        }
        for command in commands {
            self.execute(command);
        }
        if let Err(err) = self.redraw() {
            engine_warn!("failed to draw infobar: {}", err);
        }
    }

    fn remove_infobar(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;
        self.controls.clear();
        self.order.clear();
        let _ = writeln!(self.out, "(infobar closed)");
        let _ = self.out.flush();
    }
}

fn term_color(Color { r, g, b }: Color) -> style::Color {
    style::Color::Rgb { r, g, b }
}

/// Reads commands from stdin on a background thread.
pub fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(event) => {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
                None => {
                    engine_debug!("unknown command {:?}", line);
                    eprintln!("{HELP}");
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

fn parse_command(line: &str) -> Option<AppEvent> {
    match line.trim().to_ascii_lowercase().as_str() {
        "c" | "check" => Some(AppEvent::ButtonClicked {
            control_id: BUTTON_CHECK,
        }),
        "x" | "close" => Some(AppEvent::CloseClicked),
        "t" | "theme" => Some(AppEvent::ThemeToggled),
        "q" | "quit" => Some(AppEvent::QuitRequested),
        _ => None,
    }
}

pub fn print_help() {
    eprintln!("{HELP}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::resources::EnglishResources;
    use crate::platform::ui::constants::{IMAGE_SAD, LABEL_NOT_AVAILABLE, LABEL_PAGE_MISSING};
    use crate::platform::ui::layout::initial_commands;

    fn platform() -> TerminalPlatform<Vec<u8>> {
        let mut platform = TerminalPlatform::new(Vec::new(), false);
        platform.apply(initial_commands(&EnglishResources));
        platform
    }

    #[test]
    fn hidden_controls_are_not_drawn() {
        let mut platform = platform();
        platform.apply(vec![
            PlatformCommand::SetControlVisible {
                control_id: LABEL_NOT_AVAILABLE,
                visible: false,
            },
            PlatformCommand::SetControlVisible {
                control_id: IMAGE_SAD,
                visible: false,
            },
        ]);

        let line = platform.draw_line();

        assert!(line.starts_with("[Wayback Machine] | Sorry, that page is missing."));
        assert!(line.ends_with("[ Check for saved version ]"));
        assert!(!line.contains(":("));
    }

    #[test]
    fn disabled_button_shows_progress() {
        let mut platform = platform();
        platform.apply(vec![PlatformCommand::SetControlEnabled {
            control_id: BUTTON_CHECK,
            enabled: false,
        }]);

        assert!(platform.draw_line().ends_with("[ Check for saved version... ]"));
    }

    #[test]
    fn removal_stops_drawing() {
        let mut platform = platform();
        platform.remove_infobar();
        let written = platform.out.len();

        platform.apply(vec![PlatformCommand::SetControlVisible {
            control_id: BUTTON_CHECK,
            visible: false,
        }]);

        assert!(platform.removed);
        assert_eq!(platform.out.len(), written);
    }

    #[test]
    fn themed_labels_are_styled_with_their_colors() {
        let mut platform = TerminalPlatform::new(Vec::new(), true);
        platform.apply(initial_commands(&EnglishResources));
        let background = Color::rgb(0x35, 0x36, 0x3A);
        let text = Color::rgb(0xE8, 0xEA, 0xED);
        platform.apply(vec![PlatformCommand::SetLabelColors {
            control_id: LABEL_PAGE_MISSING,
            background,
            text,
        }]);

        let expected = "Sorry, that page is missing."
            .with(term_color(text))
            .on(term_color(background))
            .bold()
            .to_string();
        assert!(platform.draw_line().contains(&expected));
    }

    #[test]
    fn plain_output_has_no_styling() {
        let platform = platform();

        assert!(!platform.draw_line().contains('\x1b'));
    }

    #[test]
    fn commands_parse_case_insensitively() {
        assert_eq!(
            parse_command(" Check "),
            Some(AppEvent::ButtonClicked {
                control_id: BUTTON_CHECK
            })
        );
        assert_eq!(parse_command("q"), Some(AppEvent::QuitRequested));
        assert_eq!(parse_command("reload"), None);
    }
}
