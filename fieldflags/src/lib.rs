/*!
Bind a flat list of command line tokens (`-flagname value`) directly onto the
fields of a struct, without declaring the flags one at a time.

```
use fieldflags::{ArgFlags, Record};

#[derive(Record, Debug, Default)]
struct Options {
    pub verbose: bool,

    #[flag = "names,n"]
    pub names: Vec<String>,

    pub count: i32,
}

let args = ["-verbose", "-n", "alpha,beta", "-count", "3", "input.txt"];
let mut options = Options::default();
let unused = ArgFlags::new(&args).apply_to(&mut options).unwrap();

assert!(options.verbose);
assert_eq!(options.names, ["alpha", "beta"]);
assert_eq!(options.count, 3);
assert_eq!(unused, ["input.txt"]);
```

Every token that starts with `-` is a flag. Its name (with the dashes
stripped) is matched case-insensitively against the `pub` fields of the
target, first by field name and then by the aliases listed in the field's
`#[flag = "..."]` attribute. A field tagged with `+` is a promoted sub-record:
its own fields can be matched as if they were declared on the parent, and if
it is an empty [`Option`] it is allocated the first time one of them is used.

Each matched flag takes the following token as its value, unless that token
is itself a flag. Boolean fields are the exception: a bool flag only takes the
next token if it looks like a boolean, and is otherwise simply set to `true`.
Non-flag tokens, and flags that don't match any field, are handed back to the
caller in their original order.

Values are converted by the field's [`FieldValue`] implementation: strings,
bools, signed integers and floats are built in; [`Vec`]s are parsed from a
comma separated list; and any type implementing [`TextDecodable`] decodes
itself.
*/

extern crate self as fieldflags;

pub mod args;
pub mod coerce;
pub mod errors;
mod impls;
pub mod record;
pub mod resolve;
pub mod tag;
pub mod value;
pub mod window;

pub use args::ArgFlags;
pub use errors::{CoerceError, ConfigError, Error, SetError};
pub use record::{Field, FieldMut, Promoted, Record, Shape};
pub use resolve::{FieldPath, FlagField};
pub use value::{DecodeError, FieldValue, FromText, TextDecodable, ValueKind};

#[cfg(feature = "derive")]
pub use fieldflags_derive::Record;
