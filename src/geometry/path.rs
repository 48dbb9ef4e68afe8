use std::fmt;

use crate::math::{fix, Point2, Vector2};

/// A single SVG path command.
///
/// Only `MoveTo` is absolute. The cubic commands carry offsets relative to
/// the current point, matching the lowercase `c` and `s` path operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x,y`: start a new subpath at an absolute position.
    MoveTo(Point2),
    /// `c`: relative cubic Bezier with both control points.
    CubicRel {
        ctrl1: Vector2,
        ctrl2: Vector2,
        to: Vector2,
    },
    /// `s`: relative smooth cubic; the first control point mirrors the
    /// previous segment's second control point.
    SmoothCubicRel { ctrl2: Vector2, to: Vector2 },
}

impl PathCommand {
    /// Returns the command letter.
    #[must_use]
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::CubicRel { .. } => 'c',
            Self::SmoothCubicRel { .. } => 's',
        }
    }

    /// Returns the point reached after executing this command from `current`.
    #[must_use]
    pub fn end_point(&self, current: Point2) -> Point2 {
        match self {
            Self::MoveTo(p) => *p,
            Self::CubicRel { to, .. } | Self::SmoothCubicRel { to, .. } => current + *to,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<f64> = match self {
            Self::MoveTo(p) => vec![p.x, p.y],
            Self::CubicRel { ctrl1, ctrl2, to } => {
                vec![ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y]
            }
            Self::SmoothCubicRel { ctrl2, to } => vec![ctrl2.x, ctrl2.y, to.x, to.y],
        };
        write!(f, "{}", self.letter())?;
        for (i, value) in args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&fix(*value))?;
        }
        Ok(())
    }
}

/// An ordered sequence of path commands.
///
/// Displays as SVG path data: commands concatenated without separators,
/// arguments comma-separated with two fractional digits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Creates path data from a list of commands.
    #[must_use]
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Returns the commands in order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the number of commands, including the initial move.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if there are no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of cubic segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// Returns the absolute point at which the path ends.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        let first = match self.commands.first()? {
            PathCommand::MoveTo(p) => *p,
            _ => Point2::origin(),
        };
        Some(
            self.commands
                .iter()
                .skip(1)
                .fold(first, |current, cmd| cmd.end_point(current)),
        )
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
