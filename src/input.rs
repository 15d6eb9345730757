use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl Command {
    /// Maps one input character to a command; anything unrecognized is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' | 'z' => Some(Command::Move(Direction::Up)),
            's' => Some(Command::Move(Direction::Down)),
            'a' | 'q' => Some(Command::Move(Direction::Left)),
            'd' => Some(Command::Move(Direction::Right)),
            'x' => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn parse_line(line: &str) -> impl Iterator<Item = Command> + '_ {
        line.chars().filter_map(Command::from_char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn maps_aliases() {
        assert_eq!(Command::from_char('w'), Some(Command::Move(Up)));
        assert_eq!(Command::from_char('z'), Some(Command::Move(Up)));
        assert_eq!(Command::from_char('s'), Some(Command::Move(Down)));
        assert_eq!(Command::from_char('a'), Some(Command::Move(Left)));
        assert_eq!(Command::from_char('q'), Some(Command::Move(Left)));
        assert_eq!(Command::from_char('d'), Some(Command::Move(Right)));
        assert_eq!(Command::from_char('x'), Some(Command::Quit));
    }

    #[test]
    fn ignores_everything_else() {
        for c in ['W', 'D', '\n', ' ', '1', 'e'] {
            assert_eq!(Command::from_char(c), None);
        }
    }

    #[test]
    fn parses_a_line_in_order() {
        let commands: Vec<_> = Command::parse_line("d?s\n").collect();
        assert_eq!(commands, vec![Command::Move(Right), Command::Move(Down)]);
    }
}
