#![deny(missing_docs)]

//! # OpenAPI Document Model
//!
//! Deserialization layer for the subset of an OpenAPI document that the
//! renderers consume. Every mapping is an `IndexMap` so traversal follows
//! the key order of the source text.
//!
//! Unknown keys are ignored; the model is deliberately permissive and does
//! not validate the document.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Media type whose schema is rendered for bodies and responses.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Parses an OpenAPI document from YAML or JSON text.
///
/// JSON is valid YAML, so a single `serde_yaml` pass handles both.
pub fn parse_document(content: &str) -> AppResult<Document> {
    serde_yaml::from_str(content)
        .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI document: {}", e)))
}

/// Root of an OpenAPI document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    /// OpenAPI version string (e.g. "3.1.0").
    #[serde(default)]
    pub openapi: Option<String>,
    /// Metadata about the API.
    #[serde(default)]
    pub info: Info,
    /// Path items keyed by path template. Absent `paths` is an empty map.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable definitions.
    #[serde(default)]
    pub components: Option<Components>,
}

impl Document {
    /// Looks up a named schema in `components.schemas`.
    pub fn schema_named(&self, name: &str) -> Option<&SchemaOrRef> {
        self.components.as_ref()?.schemas.get(name)
    }

    /// Returns true when at least one path is declared.
    pub fn has_paths(&self) -> bool {
        !self.paths.is_empty()
    }
}

/// The `info` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
    /// API title.
    #[serde(default)]
    pub title: String,
    /// API version.
    #[serde(default)]
    pub version: String,
    /// Long form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// The `components` object. Only schemas take part in reference resolution.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Components {
    /// Named schema registry.
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,
}

/// HTTP methods an OpenAPI path item may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// Lowercase key as written in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(HttpMethod::Get),
            "put" => Ok(HttpMethod::Put),
            "post" => Ok(HttpMethod::Post),
            "delete" => Ok(HttpMethod::Delete),
            "options" => Ok(HttpMethod::Options),
            "head" => Ok(HttpMethod::Head),
            "patch" => Ok(HttpMethod::Patch),
            "trace" => Ok(HttpMethod::Trace),
            other => Err(AppError::General(format!("Unknown HTTP method '{}'", other))),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path item: the operations available on one path.
///
/// Only method keys are kept. `parameters`, `summary`, `servers` and `x-`
/// extensions on the path item are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// Operations keyed by method, in document order.
    pub operations: IndexMap<HttpMethod, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PathItemVisitor)
    }
}

/// Streams the path item map so operation errors keep their source position.
struct PathItemVisitor;

impl<'de> Visitor<'de> for PathItemVisitor {
    type Value = PathItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a path item object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut operations = IndexMap::new();

        while let Some(key) = map.next_key::<String>()? {
            match key.parse::<HttpMethod>() {
                Ok(method) => {
                    let operation = map.next_value::<Operation>()?;
                    operations.insert(method, operation);
                }
                Err(_) => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(PathItem { operations })
    }
}

/// A single API operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Operation {
    /// Unique operation identifier.
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Long form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Request body, if the operation accepts one.
    #[serde(rename = "requestBody", default)]
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code string, in document order.
    #[serde(default)]
    pub responses: Option<IndexMap<String, Response>>,
}

impl Operation {
    /// Summary, falling back to the operation id.
    pub fn title(&self) -> Option<&str> {
        self.summary.as_deref().or(self.operation_id.as_deref())
    }
}

/// A media type entry inside `content`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaType {
    /// Payload schema.
    #[serde(default)]
    pub schema: Option<SchemaOrRef>,
}

/// The request body object.
///
/// A body given as `$ref` deserializes with empty content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestBody {
    /// Body description.
    #[serde(default)]
    pub description: Option<String>,
    /// Payloads keyed by media type.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// Schema (or reference) of the JSON payload.
    pub fn json_schema(&self) -> Option<&SchemaOrRef> {
        json_schema(&self.content)
    }
}

/// A single response object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
    /// Response description.
    #[serde(default)]
    pub description: Option<String>,
    /// Payloads keyed by media type.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    /// Schema (or reference) of the JSON payload.
    pub fn json_schema(&self) -> Option<&SchemaOrRef> {
        json_schema(&self.content)
    }
}

fn json_schema(content: &IndexMap<String, MediaType>) -> Option<&SchemaOrRef> {
    content.get(JSON_MEDIA_TYPE)?.schema.as_ref()
}

/// Either an inline schema or a `$ref` to a named one.
///
/// Any object carrying `$ref` is a reference, whatever its siblings are.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    /// A `$ref` pointer.
    Ref(Reference),
    /// An inline schema.
    Schema(Box<Schema>),
    /// A boolean schema (`true` / `false`, OAS 3.1). Resolves to [`ANY_SCHEMA`].
    Bool(bool),
}

/// The schema boolean schemas resolve to: no type, no properties.
pub static ANY_SCHEMA: Schema = Schema {
    description: None,
    schema_type: None,
    properties: None,
    required: Vec::new(),
};

/// A `$ref` pointer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    /// Raw pointer, e.g. `#/components/schemas/Pet`.
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

impl Reference {
    /// Builds a local reference to a named component schema.
    pub fn to_schema(name: &str) -> Self {
        Self {
            ref_path: format!("#/components/schemas/{}", name),
        }
    }
}

/// A schema object, reduced to what the renderers show.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schema {
    /// Schema description.
    #[serde(default)]
    pub description: Option<String>,
    /// The `type` keyword.
    #[serde(rename = "type", default)]
    pub schema_type: Option<SchemaType>,
    /// Object properties, in document order.
    #[serde(default)]
    pub properties: Option<IndexMap<String, SchemaOrRef>>,
    /// Names of required properties.
    #[serde(default)]
    pub required: Vec<String>,
}

impl Schema {
    /// An object schema is one that declares `properties`.
    pub fn is_object(&self) -> bool {
        self.properties.is_some()
    }

    /// Whether `name` is listed in `required`.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// The `type` keyword: a single name, or a list of names (OAS 3.1).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// e.g. `type: string`
    Single(String),
    /// e.g. `type: [string, "null"]`
    Union(Vec<String>),
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Single(name) => f.write_str(name),
            SchemaType::Union(names) => f.write_str(&names.join(" | ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETSTORE: &str = r#"
openapi: 3.1.0
info:
  title: Petstore
  version: 1.0.0
  description: Sample store
paths:
  /pets:
    summary: ignored path-level key
    parameters: []
    post:
      operationId: addPet
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Pet'
      responses:
        '201':
          description: Created
    get:
      operationId: listPets
      responses:
        '200':
          description: OK
        default:
          description: Error
components:
  schemas:
    Pet:
      type: object
      required: [name]
      properties:
        name:
          type: string
        tag:
          type: [string, "null"]
"#;

    #[test]
    fn test_parse_document_preserves_order() {
        let doc = parse_document(PETSTORE).unwrap();
        assert_eq!(doc.info.title, "Petstore");
        assert_eq!(doc.info.description.as_deref(), Some("Sample store"));

        let item = doc.paths.get("/pets").unwrap();
        let methods: Vec<_> = item.operations.keys().copied().collect();
        assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Get]);

        let get = &item.operations[&HttpMethod::Get];
        let statuses: Vec<_> = get.responses.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(statuses, vec!["200", "default"]);
    }

    #[test]
    fn test_parse_document_json_input() {
        let json = r#"{"info": {"title": "J", "version": "2"}, "paths": {}}"#;
        let doc = parse_document(json).unwrap();
        assert_eq!(doc.info.version, "2");
        assert!(!doc.has_paths());
        assert!(doc.components.is_none());
    }

    #[test]
    fn test_ref_takes_precedence_over_schema() {
        let doc = parse_document(PETSTORE).unwrap();
        let post = &doc.paths["/pets"].operations[&HttpMethod::Post];
        let schema = post.request_body.as_ref().unwrap().json_schema().unwrap();
        assert_eq!(
            schema,
            &SchemaOrRef::Ref(Reference::to_schema("Pet"))
        );
    }

    #[test]
    fn test_schema_helpers_and_type_display() {
        let doc = parse_document(PETSTORE).unwrap();
        let Some(SchemaOrRef::Schema(pet)) = doc.schema_named("Pet") else {
            panic!("Pet should be an inline schema");
        };
        assert!(pet.is_object());
        assert!(pet.is_required("name"));
        assert!(!pet.is_required("tag"));

        let Some(SchemaOrRef::Schema(tag)) = pet.properties.as_ref().unwrap().get("tag") else {
            panic!("tag should be inline");
        };
        assert_eq!(tag.schema_type.as_ref().unwrap().to_string(), "string | null");
    }

    #[test]
    fn test_boolean_schemas_are_accepted() {
        let doc = parse_document(
            r#"
info: {title: T, version: '1'}
paths:
  /any:
    get:
      responses:
        '200':
          description: OK
          content:
            application/json:
              schema:
                type: object
                properties:
                  anything: true
                  nothing: false
                  id: {type: string}
components:
  schemas:
    Open: true
"#,
        )
        .unwrap();

        assert_eq!(doc.schema_named("Open"), Some(&SchemaOrRef::Bool(true)));
        let get = &doc.paths["/any"].operations[&HttpMethod::Get];
        let Some(SchemaOrRef::Schema(body)) = get.responses.as_ref().unwrap()["200"].json_schema()
        else {
            panic!("response schema should be inline");
        };
        let properties = body.properties.as_ref().unwrap();
        assert_eq!(properties["anything"], SchemaOrRef::Bool(true));
        assert_eq!(properties["nothing"], SchemaOrRef::Bool(false));
        assert!(matches!(properties["id"], SchemaOrRef::Schema(_)));
    }

    #[test]
    fn test_operation_error_points_at_the_bad_node() {
        let bad = "info: {title: T, version: '1'}\npaths:\n  /pets:\n    get:\n      responses: [1]\n";
        let err = parse_document(bad).unwrap_err().to_string();
        assert!(err.contains("line 5"), "unexpected error: {}", err);
    }

    #[test]
    fn test_parse_document_invalid() {
        let err = parse_document("paths: [1, 2").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_http_method_round_trip() {
        assert_eq!("patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!(HttpMethod::Trace.to_string(), "trace");
        assert!("parameters".parse::<HttpMethod>().is_err());
    }
}
