mod common;
mod generics;
mod record;

use proc_macro::TokenStream;

/**
Derive `fieldflags::Record` (and `fieldflags::Promoted`) for a struct with
named fields.

Only `pub` fields can be matched by flags. Each field may carry a single
`#[flag = "..."]` attribute, whose value is a comma separated list of aliases
for the field. A `+` in the list makes the field a promoted sub-record: its
type must be a record, or a `Box` or `Option` of one, and its own fields
become matchable as if they were declared here.

```ignore
#[derive(Record, Default)]
struct Options {
    #[flag = "names,n"]
    pub names: Vec<String>,

    #[flag = "+"]
    pub output: Option<Box<Output>>,
}
```
*/
#[proc_macro_derive(Record, attributes(flag))]
pub fn derive_record(item: TokenStream) -> TokenStream {
    match record::derive_record_result(item.into()) {
        Ok(out) => out.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
