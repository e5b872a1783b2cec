macro_rules! nutype_string {
    ($(#[doc=$doc:literal])* $ident:ident($($args:tt)*)) => {
        $(#[doc=$doc])*
        #[::nutype::nutype(
            $($args)*,
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Hash,
                TryFrom,
                Deref,
                AsRef,
                Display,
                Serialize,
                Deserialize,
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
