/// Implements [`Ser`](crate::Ser) and [`Deser`](crate::Deser) for a struct with
/// named fields, de/serializing the listed fields in the listed order.
///
/// Every field of the struct must be listed. Types with generic parameters, or
/// that need a different layout, implement the traits by hand instead.
///
/// ```
/// use std::collections::BTreeMap;
///
/// #[derive(PartialEq, Debug)]
/// struct Inventory {
///     owner: String,
///     counts: BTreeMap<String, u32>,
///     note: Option<Box<String>>,
/// }
/// serbin_core::impl_record!(Inventory { owner, counts, note });
///
/// let inv = Inventory {
///     owner: String::from("Aurora"),
///     counts: BTreeMap::from([(String::from("fang"), 3)]),
///     note: None,
/// };
/// let buf = serbin_core::ser_solo(&inv)?;
/// assert_eq!(inv, serbin_core::deser_solo::<Inventory>(&buf)?);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::rules::Ser for $ty {
            fn ser<W: ::std::io::Write>(
                &self,
                w: &mut $crate::codec::BinWriter<W>,
            ) -> $crate::Result<()> {
                $($crate::rules::Ser::ser(&self.$field, w)?;)*
                Ok(())
            }
        }
        impl $crate::rules::Deser for $ty {
            fn deser<R: ::std::io::Read>(
                r: &mut $crate::codec::BinReader<R>,
            ) -> $crate::Result<Self> {
                $(let $field = $crate::rules::Deser::deser(r)?;)*
                Ok(Self { $($field),* })
            }
        }
    };
}
