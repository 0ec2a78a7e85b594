//! Declarative generators for models, polymorphic factories and enums.
//!
//! Every model follows the same template: optional fields with a getter and a
//! setter, a field deserializer per wire name, and a serializer writing the
//! fields in declaration order (base fields first, additional data last).

/// `serde` impls that go through the Graph serializer, so models can be
/// embedded in any serde-driven structure.
macro_rules! serde_bridge {
    ($name:ty) => {
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let value = $crate::serialization::object_to_json(self)
                    .map_err(<S::Error as ::serde::ser::Error>::custom)?;
                ::serde::Serialize::serialize(&value, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::serialization::parse_value(&value)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

/// Declares a model.
///
/// ```text
/// graph_model! {
///     pub struct TitleArea {
///         alternative_text / set_alternative_text: String => "alternativeText",
///     }
/// }
///
/// graph_model! {
///     pub struct SitePage: BaseItem = "#microsoft.graph.sitePage" {
///         title / set_title: String => "title",
///     }
/// }
/// ```
///
/// Root models own the additional data and the `@odata.type` value; derived
/// models embed their base and seed the discriminator in `new()`.
macro_rules! graph_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $base:ident = $odata:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            base: $base,
            $( $field: Option<$ty>, )*
        }

        impl $name {
            /// Discriminator seeded by [`Self::new`].
            pub const ODATA_TYPE: &'static str = $odata;

            pub fn new() -> Self {
                let mut m = Self {
                    base: <$base>::new(),
                    $( $field: None, )*
                };
                m.base.set_odata_type(Some($odata.to_string()));
                m
            }

            pub fn base(&self) -> &$base {
                &self.base
            }

            pub fn base_mut(&mut self) -> &mut $base {
                &mut self.base
            }

            pub fn into_base(self) -> $base {
                self.base
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                #[doc = concat!("Sets the `", $wire, "` property value.")]
                pub fn $setter(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }
            )*

            pub(crate) fn serialize_fields(
                &self,
                writer: &mut $crate::serialization::JsonSerializationWriter,
            ) -> Result<(), $crate::serialization::SerializationError> {
                self.base.serialize_fields(writer)?;
                $( writer.write_value($wire, self.$field.as_ref())?; )*
                Ok(())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $base;

            fn deref(&self) -> &$base {
                &self.base
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $base {
                &mut self.base
            }
        }

        impl $crate::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                $crate::serialization::AdditionalDataHolder::additional_data(&self.base)
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                $crate::serialization::AdditionalDataHolder::additional_data_mut(&mut self.base)
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn field_deserializers(&self) -> $crate::serialization::FieldDeserializers<Self> {
                #[allow(unused_mut)]
                let mut res = $crate::serialization::Parsable::field_deserializers(&self.base)
                    .project(|m: &mut Self| &mut m.base);
                $(
                    res.insert(
                        $wire,
                        |m: &mut Self, n: &$crate::serialization::ParseNode<'_>| {
                            if let Some(val) = <$ty as $crate::serialization::FieldValue>::read(n)? {
                                m.$field = Some(val);
                            }
                            Ok(())
                        },
                    );
                )*
                res
            }

            fn serialize(
                &self,
                writer: &mut $crate::serialization::JsonSerializationWriter,
            ) -> Result<(), $crate::serialization::SerializationError> {
                self.serialize_fields(writer)?;
                writer.write_additional_data(
                    $crate::serialization::AdditionalDataHolder::additional_data(self),
                )
            }
        }

        graph_model!(@factory $name);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident $(= $odata:literal)? {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            additional_data: $crate::serialization::AdditionalData,
            odata_type: Option<String>,
            $( $field: Option<$ty>, )*
        }

        impl $name {
            pub fn new() -> Self {
                #[allow(unused_mut)]
                let mut m = Self {
                    additional_data: $crate::serialization::AdditionalData::new(),
                    odata_type: None,
                    $( $field: None, )*
                };
                $( m.odata_type = Some($odata.to_string()); )?
                m
            }

            /// The `@odata.type` discriminator.
            pub fn odata_type(&self) -> Option<&str> {
                self.odata_type.as_deref()
            }

            pub fn set_odata_type(&mut self, value: Option<String>) {
                self.odata_type = value;
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                #[doc = concat!("Sets the `", $wire, "` property value.")]
                pub fn $setter(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }
            )*

            pub(crate) fn serialize_fields(
                &self,
                writer: &mut $crate::serialization::JsonSerializationWriter,
            ) -> Result<(), $crate::serialization::SerializationError> {
                writer.write_string_value(
                    $crate::serialization::ODATA_TYPE,
                    self.odata_type.as_deref(),
                )?;
                $( writer.write_value($wire, self.$field.as_ref())?; )*
                Ok(())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                &mut self.additional_data
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn field_deserializers(&self) -> $crate::serialization::FieldDeserializers<Self> {
                let mut res = $crate::serialization::FieldDeserializers::new();
                res.insert(
                    $crate::serialization::ODATA_TYPE,
                    |m: &mut Self, n: &$crate::serialization::ParseNode<'_>| {
                        if let Some(val) = n.string_value()? {
                            m.odata_type = Some(val);
                        }
                        Ok(())
                    },
                );
                $(
                    res.insert(
                        $wire,
                        |m: &mut Self, n: &$crate::serialization::ParseNode<'_>| {
                            if let Some(val) = <$ty as $crate::serialization::FieldValue>::read(n)? {
                                m.$field = Some(val);
                            }
                            Ok(())
                        },
                    );
                )*
                res
            }

            fn serialize(
                &self,
                writer: &mut $crate::serialization::JsonSerializationWriter,
            ) -> Result<(), $crate::serialization::SerializationError> {
                self.serialize_fields(writer)?;
                writer.write_additional_data(&self.additional_data)
            }
        }

        graph_model!(@factory $name);
    };

    (@factory $name:ident) => {
        impl $crate::serialization::ParsableFactory for $name {
            fn create_from_discriminator_value(
                _node: &$crate::serialization::ParseNode<'_>,
            ) -> Result<Self, $crate::serialization::SerializationError> {
                Ok(Self::new())
            }
        }

        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &$crate::serialization::ParseNode<'_>,
            ) -> Result<Option<Self>, $crate::serialization::SerializationError> {
                node.object_value::<Self>()
            }

            fn to_json(&self) -> Result<::serde_json::Value, $crate::serialization::SerializationError> {
                $crate::serialization::object_to_json(self)
            }
        }

        serde_bridge!($name);
    };
}

/// Declares the polymorphic view of a hierarchy base type.
///
/// The generated factory reads `@odata.type` and instantiates the matching
/// variant; a missing or unknown discriminator yields the base variant, which
/// still records the wire discriminator.
macro_rules! polymorphic_model {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $base:ident = $base_disc:literal {
            $( $disc:literal => $variant:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $base($base),
            $( $variant($variant), )*
        }

        impl $name {
            /// Discriminators resolved by the factory, base type first.
            pub const DISCRIMINATORS: &'static [&'static str] = &[$base_disc $(, $disc)*];

            /// Empty instance of the type named by `discriminator`.
            pub fn from_discriminator(discriminator: Option<&str>) -> Self {
                match discriminator {
                    $( Some($disc) => $name::$variant(<$variant>::new()), )*
                    Some($base_disc) | None => $name::$base(<$base>::new()),
                    Some(other) => {
                        ::tracing::debug!(
                            discriminator = other,
                            base = $base_disc,
                            "Unknown discriminator, using base type"
                        );
                        $name::$base(<$base>::new())
                    }
                }
            }

            /// The `@odata.type` carried by the wrapped model.
            pub fn odata_type(&self) -> Option<&str> {
                match self {
                    $name::$base(m) => m.odata_type(),
                    $( $name::$variant(m) => m.odata_type(), )*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$base(<$base>::new())
            }
        }

        impl From<$base> for $name {
            fn from(value: $base) -> Self {
                $name::$base(value)
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(value: $variant) -> Self {
                    $name::$variant(value)
                }
            }
        )*

        impl $crate::serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                match self {
                    $name::$base(m) => $crate::serialization::AdditionalDataHolder::additional_data(m),
                    $( $name::$variant(m) => $crate::serialization::AdditionalDataHolder::additional_data(m), )*
                }
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                match self {
                    $name::$base(m) => $crate::serialization::AdditionalDataHolder::additional_data_mut(m),
                    $( $name::$variant(m) => $crate::serialization::AdditionalDataHolder::additional_data_mut(m), )*
                }
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn field_deserializers(&self) -> $crate::serialization::FieldDeserializers<Self> {
                match self {
                    $name::$base(m) => $crate::serialization::Parsable::field_deserializers(m)
                        .project_variant(|any: &mut Self| match any {
                            $name::$base(m) => Some(m),
                            _ => None,
                        }),
                    $(
                        $name::$variant(m) => $crate::serialization::Parsable::field_deserializers(m)
                            .project_variant(|any: &mut Self| match any {
                                $name::$variant(m) => Some(m),
                                _ => None,
                            }),
                    )*
                }
            }

            fn serialize(
                &self,
                writer: &mut $crate::serialization::JsonSerializationWriter,
            ) -> Result<(), $crate::serialization::SerializationError> {
                match self {
                    $name::$base(m) => $crate::serialization::Parsable::serialize(m, writer),
                    $( $name::$variant(m) => $crate::serialization::Parsable::serialize(m, writer), )*
                }
            }
        }

        impl $crate::serialization::ParsableFactory for $name {
            fn create_from_discriminator_value(
                node: &$crate::serialization::ParseNode<'_>,
            ) -> Result<Self, $crate::serialization::SerializationError> {
                let discriminator = match node.child_node($crate::serialization::ODATA_TYPE) {
                    Some(child) => child
                        .string_value()
                        .map_err(|e| e.at_field($crate::serialization::ODATA_TYPE))?,
                    None => None,
                };
                Ok(Self::from_discriminator(discriminator.as_deref()))
            }
        }

        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &$crate::serialization::ParseNode<'_>,
            ) -> Result<Option<Self>, $crate::serialization::SerializationError> {
                node.object_value::<Self>()
            }

            fn to_json(&self) -> Result<::serde_json::Value, $crate::serialization::SerializationError> {
                $crate::serialization::object_to_json(self)
            }
        }

        serde_bridge!($name);
    };
}

/// Declares a wire enum with its string tables.
///
/// `Display` is the value → wire string lookup, `FromStr` the reverse lookup;
/// both use the camelCase member names of the API description.
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::strum::Display,
            ::strum::EnumString,
            ::strum::IntoStaticStr,
            ::strum::EnumIter,
        )]
        #[strum(serialize_all = "camelCase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $crate::serialization::GraphEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
        }

        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &$crate::serialization::ParseNode<'_>,
            ) -> Result<Option<Self>, $crate::serialization::SerializationError> {
                node.enum_value::<Self>()
            }

            fn to_json(&self) -> Result<::serde_json::Value, $crate::serialization::SerializationError> {
                Ok(::serde_json::Value::String(
                    $crate::serialization::GraphEnum::as_wire_str(*self).to_string(),
                ))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::serialization::GraphEnum::as_wire_str(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::serialization::GraphEnum>::parse_wire(&text)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
