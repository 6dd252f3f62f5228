use wayback_core::{ElementId, InfobarColors, InfobarViewModel, ThemeProvider};

use super::constants::*;
use super::PlatformCommand;

pub fn render(view: &InfobarViewModel, theme: Option<&dyn ThemeProvider>) -> Vec<PlatformCommand> {
    let mut cmds = Vec::with_capacity(ElementId::ALL.len() + 5);

    for (ids, visible) in [(&view.visible, true), (&view.hidden, false)] {
        cmds.extend(ids.iter().map(|&id| PlatformCommand::SetControlVisible {
            control_id: control_for(id),
            visible,
        }));
    }

    cmds.push(PlatformCommand::SetControlEnabled {
        control_id: BUTTON_CHECK,
        enabled: view.check_enabled,
    });

    if view.restyle {
        cmds.extend(theme_commands(theme));
    }

    cmds
}

/// Reads the theme now; colors are never carried over between passes.
pub fn theme_commands(theme: Option<&dyn ThemeProvider>) -> Vec<PlatformCommand> {
    let colors = InfobarColors::resolve(theme);

    let mut cmds: Vec<_> = ElementId::LABELS
        .into_iter()
        .map(|id| PlatformCommand::SetLabelColors {
            control_id: control_for(id),
            background: colors.label_background,
            text: colors.label_text,
        })
        .collect();
    cmds.push(PlatformCommand::SetSeparatorColor {
        control_id: SEPARATOR,
        color: colors.separator,
    });
    cmds
}
