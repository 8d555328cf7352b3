use crate::sources::SourceKind;
use strum::Display;

/// Where an output field comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSpec {
    /// Ordered keys to descend through in the source record.
    Path(&'static [&'static str]),

    /// A nested group of fields, emitted as a nested object.
    Group(MappingTable),
}

/// One output field and its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub spec: FieldSpec,
}

/// An ordered list of output fields. Output objects keep this order.
pub type MappingTable = &'static [Field];

/// Selects which of the two table families to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TableKind {
    /// Compact fields gathered into `combined_metadata.json`.
    Summary,

    /// Detailed fields written to the per-tool page file.
    Page,
}

const fn path(name: &'static str, keys: &'static [&'static str]) -> Field {
    Field {
        name,
        spec: FieldSpec::Path(keys),
    }
}

const fn group(name: &'static str, table: MappingTable) -> Field {
    Field {
        name,
        spec: FieldSpec::Group(table),
    }
}

const BIOCONDA_SUMMARY: MappingTable = &[
    path("name", &["package", "name"]),
    path("version", &["package", "version"]),
    path("license", &["about", "license"]),
    path("summary", &["about", "summary"]),
];

const BIOCONTAINERS_SUMMARY: MappingTable = &[
    path("name", &["name"]),
    path("license", &["license"]),
    path("summary", &["description"]),
];

const BIOTOOLS_SUMMARY: MappingTable = &[
    path("license", &["license"]),
    path("summary", &["description"]),
    path("addition_date", &["additionDate"]),
    path("last_update_date", &["lastUpdate"]),
    path("version", &["version"]),
];

const BIOSCHEMAS_SUMMARY: MappingTable = &[
    path("name", &["sc:name"]),
    path("license", &["sc:license"]),
    path("version", &["sc:softwareVersion"]),
];

const GALAXY_SUMMARY: MappingTable = &[path("summary", &["Description"]), path("edam_topics", &["EDAM_topics"])];

const BIOCONDA_PAGE: MappingTable = &[
    path("name", &["package", "name"]),
    path("version", &["package", "version"]),
    path("home", &["about", "home"]),
    path("documentation", &["about", "doc_url"]),
    path("license", &["about", "license"]),
    path("summary", &["about", "summary"]),
    path("identifiers", &["extra", "identifiers"]),
];

const BIOCONTAINERS_PAGE: MappingTable = &[
    path("name", &["name"]),
    path("identifiers", &["identifiers"]),
    path("license", &["license"]),
    path("summary", &["description"]),
];

const BIOTOOLS_PAGE: MappingTable = &[
    path("id", &["biotoolsID"]),
    path("home", &["homepage"]),
    path("license", &["license"]),
    path("summary", &["description"]),
    path("addition_date", &["additionDate"]),
    path("last_update_date", &["lastUpdate"]),
    path("tool_type", &["toolType"]),
    path("version", &["version"]),
];

const BIOSCHEMAS_PAGE: MappingTable = &[
    path("name", &["sc:name"]),
    path("home", &["@id"]),
    path("license", &["sc:license"]),
    path("version", &["sc:softwareVersion"]),
    path("summary", &["sc:description"]),
    path("tool_type", &["@type"]),
];

const GALAXY_TOOL_COUNTS: MappingTable = &[
    path("eu", &["Number_of_tools_on_UseGalaxy.eu"]),
    path("org", &["Number_of_tools_on_UseGalaxy.org_(Main)"]),
    path("au", &["Number_of_tools_on_UseGalaxy.org.au"]),
    path("be", &["Number_of_tools_on_UseGalaxy.be"]),
    path("cz", &["Number_of_tools_on_UseGalaxy.cz"]),
    path("fr", &["Number_of_tools_on_UseGalaxy.fr"]),
    path("no", &["Number_of_tools_on_UseGalaxy.no"]),
];

const GALAXY_PAGE: MappingTable = &[
    path("first_commit", &["Suite_first_commit_date"]),
    path("conda_name", &["Suite_conda_package"]),
    path("conda_version", &["Latest_suite_conda_package_version"]),
    path("summary", &["Description"]),
    path("edam_operations", &["EDAM_operations"]),
    path("edam_topics", &["EDAM_topics"]),
    path("toolshed_categories", &["ToolShed_categories"]),
    path("toolshed_id", &["Suite_ID"]),
    path("users_5_years", &["Suite_users_(last_5_years)_on_main_servers"]),
    path("users_all_time", &["Suite_users_on_main_servers"]),
    path("usage_5_years", &["Suite_runs_(last_5_years)_on_main_servers"]),
    path("usage_all_time", &["Suite_runs_on_main_servers"]),
    path("bio_tools_summary", &["bio.tool_description"]),
    path("bio_tools_ids", &["bio.tool_ID"]),
    path("bio_tools_name", &["bio.tool_name"]),
    path("related_tutorials", &["Related_Tutorials"]),
    path("related_workflows", &["Related_Workflows"]),
    path("tool_ids", &["Tool_IDs"]),
    group("no_of_tools", GALAXY_TOOL_COUNTS),
];

/// The summary table for a source kind.
#[must_use]
pub const fn summary_table(kind: SourceKind) -> MappingTable {
    match kind {
        SourceKind::Bioconda => BIOCONDA_SUMMARY,
        SourceKind::Biocontainers => BIOCONTAINERS_SUMMARY,
        SourceKind::Biotools => BIOTOOLS_SUMMARY,
        SourceKind::Bioschemas => BIOSCHEMAS_SUMMARY,
        SourceKind::Galaxy => GALAXY_SUMMARY,
    }
}

/// The page table for a source kind.
#[must_use]
pub const fn page_table(kind: SourceKind) -> MappingTable {
    match kind {
        SourceKind::Bioconda => BIOCONDA_PAGE,
        SourceKind::Biocontainers => BIOCONTAINERS_PAGE,
        SourceKind::Biotools => BIOTOOLS_PAGE,
        SourceKind::Bioschemas => BIOSCHEMAS_PAGE,
        SourceKind::Galaxy => GALAXY_PAGE,
    }
}

#[must_use]
pub const fn table_for(table_kind: TableKind, kind: SourceKind) -> MappingTable {
    match table_kind {
        TableKind::Summary => summary_table(kind),
        TableKind::Page => page_table(kind),
    }
}
