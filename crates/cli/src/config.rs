use std::fs;

use greeter::props::{Person, Props};
use serde::Deserialize;

use crate::log;
use crate::report::{Error, ErrorExt, Report};
use crate::PropsArgs;

/// Props as found in a file, where any field may still be supplied by a flag.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialProps {
    name: Option<String>,
    age: Option<u32>,
    #[serde(default)]
    person: PartialPerson,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialPerson {
    title: Option<String>,
    nm: Option<String>,
    nation: Option<String>,
}

pub fn load(args: &PropsArgs) -> Report<Props> {
    let file: PartialProps = match &args.props {
        Some(path) => {
            log::loading!("props from {}", path.display());

            let json = fs::read_to_string(path)
                .with_message(|| format!("failed to read `{}`", path.display()))?;

            serde_json::from_str(&json)
                .with_message(|| format!("failed to parse `{}`", path.display()))?
        }
        None => PartialProps::default(),
    };

    merge(file, args)
}

fn merge(file: PartialProps, args: &PropsArgs) -> Report<Props> {
    let pick = |flag: &Option<String>, file: Option<String>| flag.clone().or(file);

    let name = pick(&args.name, file.name);
    let age = args.age.or(file.age);
    let title = pick(&args.title, file.person.title);
    let nm = pick(&args.nm, file.person.nm);
    let nation = pick(&args.nation, file.person.nation);

    Ok(Props::new(
        require(name, "name")?,
        require(age, "age")?,
        Person::new(
            require(title, "person.title")?,
            require(nm, "person.nm")?,
            require(nation, "person.nation")?,
        ),
    ))
}

fn require<T>(value: Option<T>, field: &str) -> Report<T> {
    value.ok_or_else(|| {
        Error::message(format!(
            "missing required property `{field}`; set it in the props file or with a flag"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada_file() -> PartialProps {
        serde_json::from_str(
            r#"{
                "name": "Ada",
                "age": 30,
                "person": { "title": "scientist", "nm": "Lovelace", "nation": "England" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn file_alone_is_enough() {
        let props = merge(ada_file(), &PropsArgs::default()).unwrap();

        assert_eq!(
            props,
            Props::new("Ada", 30, Person::new("scientist", "Lovelace", "England"))
        );
    }

    #[test]
    fn flags_alone_are_enough() {
        let args = PropsArgs {
            name: Some("Grace".into()),
            age: Some(85),
            title: Some("admiral".into()),
            nm: Some("Hopper".into()),
            nation: Some("America".into()),
            ..PropsArgs::default()
        };

        let props = merge(PartialProps::default(), &args).unwrap();

        assert_eq!(props.person.name, "Hopper");
        assert_eq!(props.age, 85);
    }

    #[test]
    fn flags_override_file() {
        let args = PropsArgs {
            name: Some("Charles".into()),
            nm: Some("Babbage".into()),
            ..PropsArgs::default()
        };

        let props = merge(ada_file(), &args).unwrap();

        assert_eq!(props.name, "Charles");
        assert_eq!(props.age, 30);
        assert_eq!(props.person.name, "Babbage");
        assert_eq!(props.person.nation, "England");
    }

    #[test]
    fn missing_field_is_rejected() {
        let file: PartialProps =
            serde_json::from_str(r#"{ "name": "Ada", "age": 30, "person": { "title": "x" } }"#)
                .unwrap();

        let err = merge(file, &PropsArgs::default()).unwrap_err();

        assert!(err.to_string().contains("`person.nm`"), "{err}");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let res = serde_json::from_str::<PartialProps>(r#"{ "nmae": "Ada" }"#);

        assert!(res.is_err());
    }

    #[test]
    fn unreadable_file_is_reported() {
        let args = PropsArgs {
            props: Some("/definitely/not/here.json".into()),
            ..PropsArgs::default()
        };

        let err = load(&args).unwrap_err();

        assert!(err.to_string().starts_with("failed to read"), "{err}");
    }
}
