//! `define_port_error!` declares the error enum of a port.
//!
//! One invocation yields the enum (with `thiserror` messages taken from the
//! `=> "..."` literals) and one snake_case constructor per variant. Constructor
//! parameters accept anything convertible into the field type, so adapters can
//! write `EntityStoreError::backend("lock poisoned")`.
//!
//! ```ignore
//! define_port_error! {
//!     /// Failures raised by a lending ledger.
//!     pub enum LedgerError {
//!         Closed => "ledger closed",
//!         Overdrawn { account: String, by: u64 } => "{account} overdrawn by {by}",
//!     }
//! }
//!
//! assert_eq!(LedgerError::closed(), LedgerError::Closed);
//! let err = LedgerError::overdrawn("shelf-3", 2_u64);
//! ```

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),+ $(,)? } )? => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field: $ty),+ } )?,
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = "Build `" $name "::" $variant "`."]
                    #[must_use]
                    pub fn [<$variant:snake>]($( $($field: impl Into<$ty>),+ )?) -> Self {
                        Self::$variant $( { $($field: $field.into()),+ } )?
                    }
                )+
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        /// Failures of a lending ledger.
        pub(crate) enum LedgerError {
            Closed => "ledger closed",
            UnknownAccount { account: String } => "no account {account}",
            Overdrawn { account: String, by: u64 } => "{account} overdrawn by {by}",
        }
    }

    #[rstest]
    #[case(LedgerError::closed(), LedgerError::Closed, "ledger closed")]
    #[case(
        LedgerError::unknown_account("shelf-3"),
        LedgerError::UnknownAccount { account: "shelf-3".to_owned() },
        "no account shelf-3"
    )]
    #[case(
        LedgerError::overdrawn(String::from("shelf-3"), 2_u8),
        LedgerError::Overdrawn { account: "shelf-3".to_owned(), by: 2 },
        "shelf-3 overdrawn by 2"
    )]
    fn constructors_convert_fields_into_variants(
        #[case] built: LedgerError,
        #[case] expected: LedgerError,
        #[case] message: &str,
    ) {
        assert_eq!(built, expected);
        assert_eq!(built.to_string(), message);
    }
}
