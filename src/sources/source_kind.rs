use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

/// The `@type` tag identifying the software node in a bioschemas graph.
pub const SOFTWARE_APPLICATION_TYPE: &str = "sc:SoftwareApplication";

/// A metadata provider.
///
/// Declaration order is processing order: when a tool folder holds several sources,
/// they are read and merged in this order, and `contents` lists them in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    /// Bioconda recipe metadata (`bioconda_<tool>.yaml`)
    Bioconda,

    /// BioContainers registry descriptor (`<tool>.biocontainers.yaml`)
    Biocontainers,

    /// bio.tools registry entry (`<tool>.biotools.json`)
    Biotools,

    /// Bioschemas JSON-LD graph (`<tool>.bioschemas.jsonld`)
    Bioschemas,

    /// Galaxy tool suite record (`<tool>.galaxy.json`)
    Galaxy,
}

/// How a parsed document becomes the record that mapping tables are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// The parsed document is the record.
    Direct,

    /// The record is the first node of the root `@graph` array whose `@type` equals the tag.
    GraphNode { type_tag: &'static str },
}

impl SourceKind {
    /// The file name this source uses inside the folder of `tool`.
    #[must_use]
    pub fn file_name(self, tool: &str) -> String {
        match self {
            Self::Bioconda => format!("bioconda_{tool}.yaml"),
            Self::Biocontainers => format!("{tool}.biocontainers.yaml"),
            Self::Biotools => format!("{tool}.biotools.json"),
            Self::Bioschemas => format!("{tool}.bioschemas.jsonld"),
            Self::Galaxy => format!("{tool}.galaxy.json"),
        }
    }

    #[must_use]
    pub const fn extraction(self) -> Extraction {
        match self {
            Self::Bioschemas => Extraction::GraphNode {
                type_tag: SOFTWARE_APPLICATION_TYPE,
            },
            Self::Bioconda | Self::Biocontainers | Self::Biotools | Self::Galaxy => Extraction::Direct,
        }
    }
}
