use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::fmt::Display;

use serde::{Serialize, Serializer, Deserializer};
use serde::de::{self, Visitor};
use serde::ser::SerializeMap;
use serde_with::{SerializeAs, DeserializeAs};

/// Serializes `None` as `{}` instead of `null`, so consumers always see an object.
pub struct EmptyMapIfNone;

impl<T> SerializeAs<Option<T>> for EmptyMapIfNone
    where
        T: Serialize,
{
    fn serialize_as<S>(source: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        match source {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Accepts either a JSON string or a bare JSON number and parses it with `FromStr`.
/// Some upstreams quote their integers (`"value": "54"`).
pub struct NumberOrString;

impl<'de, T> DeserializeAs<'de, T> for NumberOrString
    where
        T: FromStr,
        T::Err: Display,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
        where
            D: Deserializer<'de>,
    {
        struct NumberOrStringVisitor<T>(PhantomData<fn() -> T>);

        impl<'de, T> Visitor<'de> for NumberOrStringVisitor<T>
            where
                T: FromStr,
                T::Err: Display,
        {
            type Value = T;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("number or numeric string")
            }

            fn visit_str<E>(self, value: &str) -> Result<T, E>
                where
                    E: de::Error,
            {
                FromStr::from_str(value.trim()).map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<T, E>
                where
                    E: de::Error,
            {
                self.visit_str(&value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<T, E>
                where
                    E: de::Error,
            {
                self.visit_str(&value.to_string())
            }

            fn visit_f64<E>(self, value: f64) -> Result<T, E>
                where
                    E: de::Error,
            {
                self.visit_str(&value.to_string())
            }
        }

        deserializer.deserialize_any(NumberOrStringVisitor(PhantomData))
    }
}
