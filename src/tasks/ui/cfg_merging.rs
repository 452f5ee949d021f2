/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use isrt_tasks_config::{YamlRead, value_from_str};

use path_abs::{FileRead, PathFile};
use serde_yaml::{Value, Mapping};
use std::path::{Path, PathBuf};

/// A list of config yamls that can be merged into a single effective config.
#[derive(Debug, Clone)]
pub struct ConfigSources(Vec<Config>);

#[derive(Debug, Clone)]
pub(crate) struct Config {
    source: ConfigSource,
    yaml: Value,
}

#[derive(Debug, Clone, PartialEq)]
enum ConfigSource {
    File(PathBuf),
    Argument,
}

impl Config {
    /// May do path resolution and file IO
    pub(crate) fn resolve_from_arg(s: &str) -> FailResult<Config>
    { resolve_from_arg::resolve_from_arg(s) }
}

mod resolve_from_arg {
    use super::*;

    pub(crate) fn resolve_from_arg(s: &str) -> FailResult<Config> {
        // NOTE: no mechanism is provided for escaping a path containing ':'.
        match s.find(':') {
            Some(colon) => lit_from_arg(&s[..colon], &s[colon + 1..]),
            None => read_file_from_arg(s),
        }
    }

    fn lit_from_arg(path: &str, literal: &str) -> FailResult<Config> {
        let path = match path {
            "" => vec![],
            path => path.split('.').collect(),
        };
        let value = value_from_str(literal)
            .map_err(|e| format_err!("in --config literal {:?}: {}", literal, e))?;
        let yaml = make_nested_mapping(&path, value);
        let source = ConfigSource::Argument;

        Ok(Config { yaml, source })
    }

    // May do path resolution and file IO
    fn read_file_from_arg(path: &str) -> FailResult<Config> {
        let path: &Path = path.as_ref();

        let file = PathFile::new(path)?;
        let yaml = YamlRead::from_reader(FileRead::open(&file)?)
            .map_err(|e| format_err!("in config file {}: {}", path.display(), e))?;
        let source = ConfigSource::File(file.as_path().to_owned());
        Ok(Config { yaml, source })
    }

    fn make_nested_mapping(path: &[&str], mut value: Value) -> Value {
        for &key in path.iter().rev() {
            let mut mapping = Mapping::new();
            mapping.insert(Value::String(key.into()), value);
            value = Value::Mapping(mapping);
        }
        value
    }
}

impl ConfigSources {
    /// Construct from values given to --config.
    ///
    /// # Notice
    /// Relative paths will be resolved immediately, and possibly
    /// even opened, read, and parsed as yaml.
    pub fn resolve_from_args<As>(args: As) -> FailResult<Self>
    where
        As: IntoIterator,
        As::Item: AsRef<str>,
    {
        let mut out = vec![];
        for arg in args {
            out.push(Config::resolve_from_arg(arg.as_ref())?);
        }
        Ok(ConfigSources(out))
    }

    pub fn files(&self) -> impl Iterator<Item=&Path> {
        self.0.iter().filter_map(|config| match &config.source {
            ConfigSource::File(path) => Some(path.as_path()),
            ConfigSource::Argument => None,
        })
    }

    pub fn into_effective_yaml(self) -> Value {
        let empty = Value::Mapping(Default::default());
        self.0.into_iter()
            .fold(empty, |a, b| dumb_config_merge(a, b.yaml))
    }

    /// Merge and deserialize.  Unrecognized keys are logged as warnings.
    pub fn into_settings<T: YamlRead>(self) -> FailResult<T> {
        T::from_value(self.into_effective_yaml())
            .map_err(|e| format_err!("bad config: {}", e))
    }
}

/// A simplistic config-merging function which operates directly on the yaml representation,
/// independent of what is being deserialized.
///
/// Given two mappings, it takes the union of their keys and recursively merges their intersection.
/// Given any other two values, it prefers 'b'.
fn dumb_config_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Mapping(mut a), Value::Mapping(b)) => {
            for (key, b_value) in b {
                let value = match a.remove(&key) {
                    None => b_value,
                    Some(a_value) => dumb_config_merge(a_value, b_value),
                };
                a.insert(key, value);
            }
            Value::Mapping(a)
        },
        (_, b) => b,
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use isrt_tasks_config::Settings;

    macro_rules! m { ($($arg:tt)*) => { Value::Mapping(vec![$($arg)*].into_iter().collect()) }; }
    macro_rules! s { ($($arg:tt)*) => { Value::Sequence(vec![$($arg)*]) }; }

    #[test]
    fn literal_args() {
        let expected = m!{ ("insert".into(), m!{ ("high-species".into(), s!["O".into()]) }) };
        let parse = |s| Config::resolve_from_arg(s).unwrap().yaml;
        assert_eq!(expected, parse(":{insert: {high-species: [O]}}"));
        assert_eq!(expected, parse(": {insert: {high-species: [O]}}"));
        assert_eq!(expected, parse("insert:{high-species: [O]}"));
        assert_eq!(expected, parse("insert: {high-species: [O]}"));
        assert_eq!(expected, parse("insert.high-species: [O]"));
        assert_eq!(Config::resolve_from_arg("x:1").unwrap().source, ConfigSource::Argument);
    }

    #[test]
    fn later_sources_win() {
        let sources = ConfigSources::resolve_from_args(&[
            "insert: {count: 3, min-distance: 2.0}",
            "insert.count: 5",
            "output.coords: cart",
        ]).unwrap();
        assert_eq!(sources.files().count(), 0);

        let settings: Settings = sources.into_settings().unwrap();
        assert_eq!(settings.insert.count, 5);
        assert_eq!(settings.insert.min_distance, 2.0);
        assert_eq!(settings.insert.max_iterations, 1000);
    }

    #[test]
    fn non_mappings_are_replaced() {
        let a = m!{ ("a".into(), s![1.into(), 2.into()]) };
        let b = m!{ ("a".into(), s![3.into()]) };
        assert_eq!(dumb_config_merge(a, b.clone()), b);
    }

    #[test]
    fn missing_file() {
        assert!(ConfigSources::resolve_from_args(&["/definitely/not/a/config.yaml"]).is_err());
    }
}
