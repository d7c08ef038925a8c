use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{core::Bound, Float};

/// A struct that holds the results of a minimization run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinimizationSummary {
    /// The interval the search was restricted to.
    pub bound: Bound,
    /// The name of the parameter. This is `None` if no name was set.
    pub parameter_name: Option<String>,
    /// A message that can be set by minimization algorithms.
    pub message: String,
    /// The best position found.
    pub x: Float,
    /// The value of the minimization problem function at [`MinimizationSummary::x`].
    pub fx: Float,
    /// The best value found after each completed iteration, in order.
    pub best_value_history: Vec<Float>,
    /// The number of particles in the swarm.
    pub n_particles: usize,
    /// The number of completed iterations.
    pub n_iterations: usize,
    /// The number of function evaluations.
    pub cost_evals: usize,
}

impl MinimizationSummary {
    /// Set the name associated with the parameter.
    pub fn with_parameter_name(mut self, parameter_name: &str) -> Self {
        self.parameter_name = Some(parameter_name.to_string());
        self
    }
    /// Returns the `(position, value)` pair of the best point found.
    pub const fn best(&self) -> (Float, Float) {
        (self.x, self.fx)
    }
}

impl Display for MinimizationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use tabled::{
            builder::Builder,
            settings::{
                object::Row, style::HorizontalLine, themes::BorderCorrection, Alignment, Color,
                Padding, Span, Style, Theme,
            },
        };
        let mut builder = Builder::default();
        builder.push_record(["PSO RESULTS"]);
        builder.push_record(["f(x)", "", "#f(x)", "Particles", "Iterations"]);
        builder.push_record([
            format!("{:.6}", self.fx),
            String::new(),
            self.cost_evals.to_string(),
            self.n_particles.to_string(),
            self.n_iterations.to_string(),
        ]);
        builder.push_record(["Message", &self.message]);
        builder.push_record(["Parameter", "", "Bound", "", "At Limit?"]);
        builder.push_record(["", "=", "-", "+", ""]);
        builder.push_record([
            self.parameter_name.clone().unwrap_or_else(|| "x".to_string()),
            format!("{:.6}", self.x),
            format!("{:.6}", self.bound.lower()),
            format!("{:.6}", self.bound.upper()),
            (if self.bound.at_bound(self.x) { "Yes" } else { "No" }).to_string(),
        ]);

        let mut table = builder.build();
        let mut style = Theme::from_style(Style::rounded().remove_horizontals());
        for line in 1..=5 {
            style.insert_horizontal_line(line, HorizontalLine::inherit(Style::modern()));
        }

        table
            .with(style)
            .modify(
                Row::from(0),
                (Padding::new(1, 1, 1, 1), Alignment::center(), Color::BOLD),
            )
            .modify((0, 0), Span::column(5))
            .modify(Row::from(1), Color::BOLD)
            .modify((1, 0), Span::column(2))
            .modify((2, 0), Span::column(2))
            .modify((3, 0), Color::BOLD)
            .modify((3, 1), Span::column(4))
            .modify(Row::from(4), Color::BOLD)
            .modify((4, 0), Span::column(2))
            .modify((4, 2), Span::column(2))
            .modify(Row::from(5), Color::BOLD)
            .with(BorderCorrection::span());

        f.write_str(&table.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> MinimizationSummary {
        MinimizationSummary {
            bound: Bound::new(-10.0, 10.0).unwrap(),
            parameter_name: None,
            message: "Maximum number of iterations reached (3)".to_string(),
            x: 0.25,
            fx: 0.0625,
            best_value_history: vec![1.0, 0.5, 0.0625],
            n_particles: 4,
            n_iterations: 3,
            cost_evals: 16,
        }
    }

    #[test]
    fn test_best() {
        assert_eq!(summary().best(), (0.25, 0.0625));
    }

    #[test]
    fn test_display_table() {
        let table = summary().with_parameter_name("position").to_string();
        assert!(table.contains("PSO RESULTS"));
        assert!(table.contains("position"));
        assert!(table.contains("0.062500"));
        assert!(table.contains("-10.000000"));
        assert!(table.contains("Maximum number of iterations reached (3)"));
    }
}
