use std::str::FromStr;

use crate::{FormatError, GearProbe, Mission};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Format {
    /// Numbered list
    #[default]
    Plain,
    /// HTML ordered list
    Markup,
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(Format::Plain),
            "markup" => Ok(Format::Markup),
            _ => Err(FormatError::InvalidFormat(s.to_string())),
        }
    }
}

/// Renders the mission with the phrasing of the template that produced it.
#[must_use]
pub fn render(mission: &Mission, format: Format) -> String {
    let mut exercises = mission.exercises().iter();
    let items = mission
        .template()
        .lines
        .iter()
        .map(|line| {
            let names = exercises
                .by_ref()
                .take(line.slots.len())
                .map(|e| e.exercise.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {names}", line.prescription)
        })
        .collect::<Vec<_>>();
    list(&items, format)
}

/// Parses the format first, so an unknown format never produces output.
pub fn render_str(mission: &Mission, format: &str) -> Result<String, FormatError> {
    let format = Format::from_str(format)?;
    Ok(render(mission, format))
}

#[must_use]
pub fn render_probe(probes: &[GearProbe], format: Format) -> String {
    let items = probes
        .iter()
        .map(|p| {
            if p.can_complete_standard {
                format!("{} (can complete standard mission)", p.gear)
            } else {
                p.gear.to_string()
            }
        })
        .collect::<Vec<_>>();
    list(&items, format)
}

fn list(items: &[String], format: Format) -> String {
    match format {
        Format::Plain => items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {item}\n", i + 1))
            .collect(),
        Format::Markup => {
            let entries = items
                .iter()
                .map(|item| format!("  <li>{}</li>\n", escape(item)))
                .collect::<String>();
            format!("<ol>\n{entries}</ol>\n")
        }
    }
}

fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
