//! Built-in exclusion lists for concrete checkers.

/// Attributes whose listing order is meaningful and must not be sorted.
pub const SORTED_LISTING_EXCLUDES: &[&str] = &[
    "com.fasterxml.jackson.annotation.JsonPropertyOrder#value",
    "io.swagger.annotations.ApiImplicitParams#value",
    "io.swagger.v3.oas.annotations.Parameters#value",
    "javax.xml.bind.annotation.XmlType#propOrder",
    "org.springframework.context.annotation.PropertySource#value",
    "org.springframework.test.context.TestPropertySource#locations",
    "org.springframework.test.context.TestPropertySource#value",
    "picocli.CommandLine.Option#names",
];
