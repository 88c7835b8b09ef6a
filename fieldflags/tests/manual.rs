//! Records implemented by hand, without the derive.

use fieldflags::{
    ArgFlags, ConfigError, Error, Field, FieldMut, Promoted, Record, Shape,
};

#[derive(Debug, Default)]
struct Settings {
    level: i64,
    tags: Vec<String>,
    secret: String,
}

static SETTINGS: Shape = Shape {
    type_name: "Settings",
    fields: &[
        Field {
            name: "level",
            tag: "lvl,l",
            exported: true,
            record: None,
        },
        Field {
            name: "tags",
            tag: "",
            exported: true,
            record: None,
        },
        Field {
            name: "secret",
            tag: "",
            exported: false,
            record: None,
        },
    ],
};

impl Record for Settings {
    fn shape(&self) -> &'static Shape {
        &SETTINGS
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Value(&mut self.level)),
            1 => Some(FieldMut::Value(&mut self.tags)),
            _ => None,
        }
    }
}

impl Promoted for Settings {
    fn promoted_shape() -> &'static Shape {
        &SETTINGS
    }

    fn ensure_present(&mut self) -> &mut dyn Record {
        self
    }
}

#[test]
fn hand_written_record() {
    let mut settings = Settings::default();
    let unused = ArgFlags::new(&["-L", "3", "-tags", "x,y", "-secret", "s"])
        .apply_to(&mut settings)
        .unwrap();

    assert_eq!(settings.level, 3);
    assert_eq!(settings.tags, ["x", "y"]);
    assert_eq!(settings.secret, "");
    assert_eq!(unused, ["-secret", "s"]);
}

#[derive(Default)]
struct Wrapper {
    settings: Option<Settings>,
}

static WRAPPER: Shape = Shape {
    type_name: "Wrapper",
    fields: &[Field {
        name: "settings",
        tag: "+",
        exported: true,
        record: Some(<Option<Settings> as Promoted>::promoted_shape as fn() -> &'static Shape),
    }],
};

impl Record for Wrapper {
    fn shape(&self) -> &'static Shape {
        &WRAPPER
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Record(&mut self.settings)),
            _ => None,
        }
    }
}

#[test]
fn hand_written_promotion() {
    let mut wrapper = Wrapper::default();
    ArgFlags::new(&["-lvl", "9"]).apply_to(&mut wrapper).unwrap();

    assert_eq!(wrapper.settings.map(|settings| settings.level), Some(9));
}

/// Tags a plain value as a promoted sub-record
struct NotNested {
    value: i32,
}

static NOT_NESTED: Shape = Shape {
    type_name: "NotNested",
    fields: &[
        Field {
            name: "name",
            tag: "",
            exported: true,
            record: None,
        },
        Field {
            name: "value",
            tag: "+",
            exported: true,
            record: None,
        },
    ],
};

impl Record for NotNested {
    fn shape(&self) -> &'static Shape {
        &NOT_NESTED
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            1 => Some(FieldMut::Value(&mut self.value)),
            _ => None,
        }
    }
}

#[test]
fn promotion_of_a_non_record() {
    let expected = ConfigError::NotARecord {
        type_name: "NotNested",
        field: "value",
    };

    let mut record = NotNested { value: 0 };
    let empty: [&str; 0] = [];
    let err = ArgFlags::new(&empty).apply_to(&mut record).unwrap_err();
    assert!(matches!(err, Error::Config(ref config) if *config == expected));

    // Resolution reports the bad field as soon as it reaches it, but a name
    // declared before it still matches.
    let path = NOT_NESTED.resolve("name").unwrap().unwrap();
    assert_eq!(path.indices(), [0]);
    assert_eq!(NOT_NESTED.resolve("other").unwrap_err(), expected);
    assert_eq!(record.value, 0);
}

/// Lists a field that its accessor doesn't provide
struct Incomplete {
    #[allow(dead_code)]
    count: i32,
}

static INCOMPLETE: Shape = Shape {
    type_name: "Incomplete",
    fields: &[Field {
        name: "count",
        tag: "",
        exported: true,
        record: None,
    }],
};

impl Record for Incomplete {
    fn shape(&self) -> &'static Shape {
        &INCOMPLETE
    }

    fn field_mut(&mut self, _index: usize) -> Option<FieldMut<'_>> {
        None
    }
}

#[test]
fn inaccessible_field() {
    let mut record = Incomplete { count: 0 };

    let unused = ArgFlags::new(&["pos"]).apply_to(&mut record).unwrap();
    assert_eq!(unused, ["pos"]);

    let err = ArgFlags::new(&["-count", "1"])
        .apply_to(&mut record)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Config(ConfigError::Inaccessible {
            type_name: "Incomplete",
            field: "count",
        })
    ));
}
