//! Plain-text frame composition
//!
//! Layer order: blank canvas, remaining text, projectiles, player. The status
//! block follows the playfield.

use crate::consts::*;
use crate::sim::GameState;

/// Marker glyphs for the moving parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub player: char,
    pub projectile: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            player: PLAYER_GLYPH,
            projectile: PROJECTILE_GLYPH,
        }
    }
}

/// Projects a game state into text. Holds no per-frame state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    glyphs: Glyphs,
}

impl Renderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// The playfield as `height` rows of exactly `width` characters
    pub fn playfield(&self, state: &GameState) -> Vec<Vec<char>> {
        let mut canvas = vec![vec![BLANK; state.width]; state.height];

        for (y, row) in state.grid.rows().iter().enumerate() {
            canvas[y][..row.len()].copy_from_slice(row);
        }

        for p in &state.projectiles {
            if p.y < state.height && p.x < state.width {
                canvas[p.y][p.x] = self.glyphs.projectile;
            }
        }

        if state.player_x < state.width {
            canvas[state.player_row()][state.player_x] = self.glyphs.player;
        }

        canvas
    }

    /// Status block: score, active mode, controls legend
    pub fn status(&self, state: &GameState) -> Vec<String> {
        let mut lines = vec![String::new(), format!("Score : {}", state.score)];
        if state.pierce {
            lines.push("Pierce Mode".to_string());
        }
        lines.push(String::new());
        lines.push(LEGEND.to_string());
        lines
    }

    /// Every line of the frame, without line terminators
    pub fn frame_lines(&self, state: &GameState) -> Vec<String> {
        self.playfield(state)
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .chain(self.status(state))
            .collect()
    }

    /// The full frame as one string, each line ending in `'\n'`
    pub fn render(&self, state: &GameState) -> String {
        let mut out = String::new();
        for line in self.frame_lines(state) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Grid;
    use crate::sim::{Command, apply, tick};

    fn state(text: &str) -> GameState {
        GameState::new(Grid::from_text(text))
    }

    #[test]
    fn test_initial_frame() {
        let s = state("HELLO");
        let frame = Renderer::default().render(&s);
        let expected = format!(
            "HELLO\n     \n     \n     \n     \n  A  \n\nScore : 0\n\n{}\n",
            LEGEND
        );
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_playfield_is_rectangular() {
        let s = state("a\nlonger line\n\nxy");
        let field = Renderer::default().playfield(&s);
        assert_eq!(field.len(), s.height);
        assert!(field.iter().all(|row| row.len() == s.width));
        assert_eq!(field[0][0], 'a');
        assert_eq!(field[0][1], ' ');
    }

    #[test]
    fn test_projectile_and_pierce_line() {
        let mut s = state("abc");
        apply(&mut s, Command::Fire);
        apply(&mut s, Command::TogglePierce);
        tick(&mut s);

        let lines = Renderer::default().frame_lines(&s);
        // height 6: projectile fired at row 4, now on row 3
        assert_eq!(lines[3], " | ");
        assert_eq!(lines[5], " A ");
        assert!(lines.contains(&"Pierce Mode".to_string()));
    }

    #[test]
    fn test_custom_glyphs() {
        let mut s = state("abc");
        s.fire();
        let renderer = Renderer::new(Glyphs {
            player: '^',
            projectile: '*',
        });
        let lines = renderer.frame_lines(&s);
        assert_eq!(lines[4], " * ");
        assert_eq!(lines[5], " ^ ");
    }

    #[test]
    fn test_render_is_pure() {
        let mut s = state("HELLO\nWORLD");
        s.fire();
        tick(&mut s);
        let before = serde_json::to_string(&s).unwrap();

        let renderer = Renderer::default();
        let a = renderer.render(&s);
        let b = renderer.render(&s);
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&s).unwrap(), before);
    }
}
