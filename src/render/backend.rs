//! Pluggable plot backends.
//!
//! The text [`Renderer`](crate::render::Renderer) is the default.  The
//! [`ExternalPlotter`] hands the raw points to a graphing program instead and
//! blocks until that program exits; nothing else in the crate needs the
//! program to be installed.

use std::{
    fmt::Write as _,
    io::Write,
    process::{Command, Stdio},
};

use crate::core::{config::Config, data::PointSet, error::GraphError};

/// Something that can display a whole point set.
pub trait PlotBackend {
    fn plot(&mut self, points: &PointSet, config: &Config) -> Result<(), GraphError>;
}

/// Pipes the points into an interactive plotter (gnuplot by default).
#[derive(Clone, Debug)]
pub struct ExternalPlotter {
    program: String,
    args: Vec<String>,
}

impl Default for ExternalPlotter {
    fn default() -> Self {
        Self::new("gnuplot")
    }
}

impl ExternalPlotter {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[inline]
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Gnuplot script with the points inline.  `pause mouse close` keeps the
    /// program alive until its window is closed.
    #[must_use]
    pub fn script(points: &PointSet) -> String {
        let (xs, ys) = points.columns();
        let mut s = String::with_capacity(64 + xs.len() * 16);
        s.push_str("plot '-' using 1:2 with points pointtype 7 notitle\n");
        for (x, y) in xs.iter().zip(&ys) {
            let _ = writeln!(s, "{x} {y}");
        }
        s.push_str("e\npause mouse close\n");
        s
    }
}

impl PlotBackend for ExternalPlotter {
    fn plot(&mut self, points: &PointSet, _config: &Config) -> Result<(), GraphError> {
        if points.is_empty() {
            return Err(GraphError::NoData);
        }
        let script = Self::script(points);

        tracing::info!(program = %self.program, points = points.distinct_len(), "launching plotter");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| GraphError::Plotter {
                program: self.program.clone(),
                source,
            })?;

        // stdin is dropped (closed) at the end of this expression
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(script.as_bytes()));

        let status = child.wait()?;
        tracing::debug!(program = %self.program, %status, "plotter exited");
        if !status.success() {
            return Err(GraphError::PlotterExit {
                program: self.program.clone(),
                status,
            });
        }
        written?;
        Ok(())
    }
}
