//! Shared record heads and value-level enumerations.

use crate::model::NamedEnum;
use crate::model::reference::Reference;

/// A language-tagged text entry. Display names and descriptions are
/// ordered lists of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangString {
    /// BCP 47 language tag, e.g. `en` or `de-CH`.
    pub language: String,
    pub text: String,
}

impl LangString {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        LangString {
            language: language.into(),
            text: text.into(),
        }
    }
}

/// Whether a model element is a template or an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModellingKind {
    Instance,
    Template,
}

impl NamedEnum for ModellingKind {
    const NAME: &'static str = "ModellingKind";

    fn as_str(self) -> &'static str {
        match self {
            ModellingKind::Instance => "Instance",
            ModellingKind::Template => "Template",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "Instance" => Some(ModellingKind::Instance),
            "Template" => Some(ModellingKind::Template),
            _ => None,
        }
    }
}

/// Qualifier kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualifierKind {
    ConceptQualifier,
    TemplateQualifier,
    ValueQualifier,
}

impl NamedEnum for QualifierKind {
    const NAME: &'static str = "QualifierKind";

    fn as_str(self) -> &'static str {
        match self {
            QualifierKind::ConceptQualifier => "ConceptQualifier",
            QualifierKind::TemplateQualifier => "TemplateQualifier",
            QualifierKind::ValueQualifier => "ValueQualifier",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "ConceptQualifier" => Some(QualifierKind::ConceptQualifier),
            "TemplateQualifier" => Some(QualifierKind::TemplateQualifier),
            "ValueQualifier" => Some(QualifierKind::ValueQualifier),
            _ => None,
        }
    }
}

/// The xs:* value types a Property, Range, Extension or Qualifier value
/// may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTypeDefXsd {
    AnyUri,
    Base64Binary,
    Boolean,
    Byte,
    Date,
    DateTime,
    Decimal,
    Double,
    Duration,
    Float,
    GDay,
    GMonth,
    GMonthDay,
    GYear,
    GYearMonth,
    HexBinary,
    Int,
    Integer,
    Long,
    NegativeInteger,
    NonNegativeInteger,
    NonPositiveInteger,
    PositiveInteger,
    Short,
    String,
    Time,
    UnsignedByte,
    UnsignedInt,
    UnsignedLong,
    UnsignedShort,
}

impl NamedEnum for DataTypeDefXsd {
    const NAME: &'static str = "DataTypeDefXsd";

    fn as_str(self) -> &'static str {
        match self {
            DataTypeDefXsd::AnyUri => "xs:anyURI",
            DataTypeDefXsd::Base64Binary => "xs:base64Binary",
            DataTypeDefXsd::Boolean => "xs:boolean",
            DataTypeDefXsd::Byte => "xs:byte",
            DataTypeDefXsd::Date => "xs:date",
            DataTypeDefXsd::DateTime => "xs:dateTime",
            DataTypeDefXsd::Decimal => "xs:decimal",
            DataTypeDefXsd::Double => "xs:double",
            DataTypeDefXsd::Duration => "xs:duration",
            DataTypeDefXsd::Float => "xs:float",
            DataTypeDefXsd::GDay => "xs:gDay",
            DataTypeDefXsd::GMonth => "xs:gMonth",
            DataTypeDefXsd::GMonthDay => "xs:gMonthDay",
            DataTypeDefXsd::GYear => "xs:gYear",
            DataTypeDefXsd::GYearMonth => "xs:gYearMonth",
            DataTypeDefXsd::HexBinary => "xs:hexBinary",
            DataTypeDefXsd::Int => "xs:int",
            DataTypeDefXsd::Integer => "xs:integer",
            DataTypeDefXsd::Long => "xs:long",
            DataTypeDefXsd::NegativeInteger => "xs:negativeInteger",
            DataTypeDefXsd::NonNegativeInteger => "xs:nonNegativeInteger",
            DataTypeDefXsd::NonPositiveInteger => "xs:nonPositiveInteger",
            DataTypeDefXsd::PositiveInteger => "xs:positiveInteger",
            DataTypeDefXsd::Short => "xs:short",
            DataTypeDefXsd::String => "xs:string",
            DataTypeDefXsd::Time => "xs:time",
            DataTypeDefXsd::UnsignedByte => "xs:unsignedByte",
            DataTypeDefXsd::UnsignedInt => "xs:unsignedInt",
            DataTypeDefXsd::UnsignedLong => "xs:unsignedLong",
            DataTypeDefXsd::UnsignedShort => "xs:unsignedShort",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "xs:anyURI" => Some(DataTypeDefXsd::AnyUri),
            "xs:base64Binary" => Some(DataTypeDefXsd::Base64Binary),
            "xs:boolean" => Some(DataTypeDefXsd::Boolean),
            "xs:byte" => Some(DataTypeDefXsd::Byte),
            "xs:date" => Some(DataTypeDefXsd::Date),
            "xs:dateTime" => Some(DataTypeDefXsd::DateTime),
            "xs:decimal" => Some(DataTypeDefXsd::Decimal),
            "xs:double" => Some(DataTypeDefXsd::Double),
            "xs:duration" => Some(DataTypeDefXsd::Duration),
            "xs:float" => Some(DataTypeDefXsd::Float),
            "xs:gDay" => Some(DataTypeDefXsd::GDay),
            "xs:gMonth" => Some(DataTypeDefXsd::GMonth),
            "xs:gMonthDay" => Some(DataTypeDefXsd::GMonthDay),
            "xs:gYear" => Some(DataTypeDefXsd::GYear),
            "xs:gYearMonth" => Some(DataTypeDefXsd::GYearMonth),
            "xs:hexBinary" => Some(DataTypeDefXsd::HexBinary),
            "xs:int" => Some(DataTypeDefXsd::Int),
            "xs:integer" => Some(DataTypeDefXsd::Integer),
            "xs:long" => Some(DataTypeDefXsd::Long),
            "xs:negativeInteger" => Some(DataTypeDefXsd::NegativeInteger),
            "xs:nonNegativeInteger" => Some(DataTypeDefXsd::NonNegativeInteger),
            "xs:nonPositiveInteger" => Some(DataTypeDefXsd::NonPositiveInteger),
            "xs:positiveInteger" => Some(DataTypeDefXsd::PositiveInteger),
            "xs:short" => Some(DataTypeDefXsd::Short),
            "xs:string" => Some(DataTypeDefXsd::String),
            "xs:time" => Some(DataTypeDefXsd::Time),
            "xs:unsignedByte" => Some(DataTypeDefXsd::UnsignedByte),
            "xs:unsignedInt" => Some(DataTypeDefXsd::UnsignedInt),
            "xs:unsignedLong" => Some(DataTypeDefXsd::UnsignedLong),
            "xs:unsignedShort" => Some(DataTypeDefXsd::UnsignedShort),
            _ => None,
        }
    }
}

/// An extension attached to any referable record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extension {
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Option<Vec<Reference>>,
    pub name: String,
    pub value_type: Option<DataTypeDefXsd>,
    pub value: Option<String>,
    pub refers_to: Option<Vec<Reference>>,
}

/// A qualifier attached to a qualifiable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Option<Vec<Reference>>,
    pub kind: Option<QualifierKind>,
    /// The qualifier type token ("type" in the metamodel).
    pub qualifier_type: String,
    pub value_type: DataTypeDefXsd,
    pub value: Option<String>,
    pub value_id: Option<Reference>,
}

/// Administrative metadata of an identifiable record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdministrativeInformation {
    pub version: Option<String>,
    pub revision: Option<String>,
    pub creator: Option<Reference>,
    pub template_id: Option<String>,
}

/// A supplementary, typically proprietary identifier of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecificAssetId {
    pub semantic_id: Option<Reference>,
    pub supplemental_semantic_ids: Option<Vec<Reference>>,
    pub name: String,
    pub value: String,
    pub external_subject_id: Option<Reference>,
}

/// The shared head of every record: extensions plus naming fields.
///
/// `display_name` and `description` are order-significant; the codec
/// preserves their order across a round trip. An `Option` that is `None`
/// means the field was never set — the codec keeps "absent" distinct from
/// "present but empty".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Referable {
    pub extensions: Option<Vec<Extension>>,
    pub category: Option<String>,
    pub id_short: Option<String>,
    pub display_name: Option<Vec<LangString>>,
    pub description: Option<Vec<LangString>>,
}
