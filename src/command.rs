//! Parser for the interactive command language.
//!
//! ```text
//! add "Weber Street" ( 2 -1 2 2 5 5 )
//! mod "Weber Street" ( 2 1 2 2 )
//! rm "Weber Street"
//! gg
//! ```
//!
//! Street names may be quoted and may contain spaces. Inside the
//! coordinate list, whitespace, commas and parentheses all separate
//! values, so `(2,-1) (2,2)` is accepted too.
use std::str::FromStr;

use geo::{Coordinate, LineString};

use crate::{
    error::{CrossingError, ParseError},
    graph::Graph,
    maintainer::Crossings,
};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        name: String,
        polyline: LineString<f64>,
    },
    Modify {
        name: String,
        polyline: LineString<f64>,
    },
    Remove {
        name: String,
    },
    Graph,
}

impl Command {
    /// Run the command against `crossings`. Returns the graph for
    /// [`Command::Graph`] and `None` for mutations.
    pub fn apply(self, crossings: &mut Crossings) -> Result<Option<Graph>, CrossingError> {
        match self {
            Command::Add { name, polyline } => crossings.add(name, polyline).map(|_| None),
            Command::Modify { name, polyline } => {
                crossings.modify(&name, polyline).map(|_| None)
            }
            Command::Remove { name } => crossings.remove(&name).map(|_| None),
            Command::Graph => Ok(Some(crossings.graph())),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (cmd, rest) = match line.find(char::is_whitespace) {
            Some(idx) => (&line[..idx], line[idx..].trim()),
            None => (line, ""),
        };

        match cmd {
            "" => Err(ParseError::EmptyInput),
            "gg" => {
                if rest.is_empty() {
                    Ok(Command::Graph)
                } else {
                    Err(ParseError::UnexpectedArguments(rest.to_owned()))
                }
            }
            "rm" => Ok(Command::Remove {
                name: parse_name(rest)?,
            }),
            "add" => {
                let (name, polyline) = parse_street(rest)?;
                Ok(Command::Add { name, polyline })
            }
            "mod" => {
                let (name, polyline) = parse_street(rest)?;
                Ok(Command::Modify { name, polyline })
            }
            _ => Err(ParseError::UnknownCommand(cmd.to_owned())),
        }
    }
}

fn parse_name(s: &str) -> Result<String, ParseError> {
    let name = s.trim().trim_matches('"').trim();
    if name.is_empty() {
        Err(ParseError::MissingName)
    } else {
        Ok(name.to_owned())
    }
}

fn parse_street(s: &str) -> Result<(String, LineString<f64>), ParseError> {
    let idx = s.find('(').ok_or(ParseError::MissingCoordinates)?;
    let name = parse_name(&s[..idx])?;

    let values = s[idx..]
        .split(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(tok.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() % 2 != 0 {
        return Err(ParseError::OddCoordinateCount);
    }

    let coords: Vec<_> = values
        .chunks(2)
        .map(|xy| Coordinate { x: xy[0], y: xy[1] })
        .collect();
    Ok((name, coords.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn street(pts: &[(f64, f64)]) -> LineString<f64> {
        pts.to_vec().into()
    }

    #[test]
    fn test_add() {
        let cmd: Command = r#"add "Weber Street" ( 2 -1 2 2 5 5 )"#.parse().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "Weber Street".into(),
                polyline: street(&[(2., -1.), (2., 2.), (5., 5.)]),
            }
        );
    }

    #[test]
    fn test_mod_tuple_style() {
        let cmd: Command = "mod A (2,-1) (2.5,2)".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Modify {
                name: "A".into(),
                polyline: street(&[(2., -1.), (2.5, 2.)]),
            }
        );
    }

    #[test]
    fn test_unclosed_list() {
        let cmd: Command = "add A ( 0 0 10 0".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "A".into(),
                polyline: street(&[(0., 0.), (10., 0.)]),
            }
        );
    }

    #[test]
    fn test_rm_and_gg() {
        assert_eq!(
            r#"rm "Weber Street""#.parse::<Command>(),
            Ok(Command::Remove {
                name: "Weber Street".into()
            })
        );
        assert_eq!("  gg  ".parse::<Command>(), Ok(Command::Graph));
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseError::EmptyInput));
        assert_eq!(
            "draw A".parse::<Command>(),
            Err(ParseError::UnknownCommand("draw".into()))
        );
        assert_eq!(
            "gg now".parse::<Command>(),
            Err(ParseError::UnexpectedArguments("now".into()))
        );
        assert_eq!("rm".parse::<Command>(), Err(ParseError::MissingName));
        assert_eq!(
            r#"add "" ( 0 0 )"#.parse::<Command>(),
            Err(ParseError::MissingName)
        );
        assert_eq!(
            "add A 0 0 1 1".parse::<Command>(),
            Err(ParseError::MissingCoordinates)
        );
        assert_eq!(
            "add A ( 0 0 1 )".parse::<Command>(),
            Err(ParseError::OddCoordinateCount)
        );
        assert_eq!(
            "add A ( 0 x )".parse::<Command>(),
            Err(ParseError::InvalidNumber("x".into()))
        );
    }

    #[test]
    fn test_apply() {
        let mut crossings = Crossings::new();
        let script = [
            "add A ( 0 0 10 0 )",
            "add B ( 5 -5 5 5 )",
            "mod B ( 2 -5 2 5 )",
        ];
        for line in script.iter() {
            let out = line.parse::<Command>().unwrap().apply(&mut crossings).unwrap();
            assert!(out.is_none());
        }
        let graph = Command::Graph.apply(&mut crossings).unwrap().unwrap();
        assert!(graph.has_edge("A", "B"));

        assert_eq!(
            "rm C".parse::<Command>().unwrap().apply(&mut crossings),
            Err(CrossingError::UnknownStreet("C".into()))
        );
    }
}
