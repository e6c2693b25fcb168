//! Requests against the MIB surface (`/?domain=mib&urn=<table>`).
//!
//! Queries list the MIB objects to return as `mibObject<N>` parameters.
//! When several tables are queried at once (`urn=a|b`), each table's
//! objects are prefixed with the table name: `a-mibObject0`.

use crate::error::ValidationError;
use crate::transport::{DeviceRequest, RequestOptions};

/// Default row limit used by the listing endpoints.
pub const DEFAULT_LIMIT: u32 = 200;

/// Builder for a MIB read.
///
/// # Example
///
/// ```rust
/// use aos8_client::command::MibQuery;
///
/// let request = MibQuery::new("vlanTable")
///     .objects(["vlanNumber", "vlanDescription"])
///     .limit(50)
///     .ignore_error(true)
///     .into_request()
///     .unwrap();
/// assert_eq!(request.path, "/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MibQuery {
    urn: String,
    objects: Vec<(Option<String>, String)>,
    function: Option<String>,
    object: Option<String>,
    filter: Option<(String, String, String)>,
    limit: Option<u32>,
    ignore_error: bool,
}

impl MibQuery {
    /// Start a query for one table or a `|`-joined set of tables.
    pub fn new(urn: impl Into<String>) -> Self {
        Self {
            urn: urn.into(),
            ..Default::default()
        }
    }

    /// Add MIB objects, numbered in order.
    pub fn objects<I, S>(mut self, objects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objects
            .extend(objects.into_iter().map(|o| (None, o.into())));
        self
    }

    /// Add MIB objects for one table of a multi-table query.
    pub fn table_objects<I, S>(mut self, table: &str, objects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objects.extend(
            objects
                .into_iter()
                .map(|o| (Some(table.to_string()), o.into())),
        );
        self
    }

    /// Set the server-side conversion function(s).
    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Set the object(s) the conversion function applies to.
    pub fn object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Keep only rows where `object <operation> value`.
    pub fn filter(
        mut self,
        object: impl Into<String>,
        operation: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.filter = Some((object.into(), operation.into(), value.into()));
        self
    }

    /// Set the maximum number of rows.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Ask the device to skip objects it cannot read instead of failing.
    pub fn ignore_error(mut self, ignore: bool) -> Self {
        self.ignore_error = ignore;
        self
    }

    /// Validate and turn the query into a GET request.
    pub fn into_request(self) -> Result<DeviceRequest, ValidationError> {
        if self.urn.trim().is_empty() {
            return Err(ValidationError::Empty { field: "urn" });
        }
        if let Some(limit) = self.limit {
            validate_limit(limit)?;
        }

        let mut options = RequestOptions::new()
            .query("domain", "mib")
            .query("urn", &self.urn);

        for (position, (table, object)) in self.objects.iter().enumerate() {
            // Numbering restarts for every table
            let index = self.objects[..position]
                .iter()
                .filter(|(t, _)| t == table)
                .count();
            let key = match table {
                Some(table) => format!("{}-mibObject{}", table, index),
                None => format!("mibObject{}", index),
            };
            options = options.query(key, object);
        }

        if let Some(function) = &self.function {
            options = options.query("function", function);
        }
        if let Some(object) = &self.object {
            options = options.query("object", object);
        }
        if let Some((object, operation, value)) = &self.filter {
            options = options
                .query("filterObject", object)
                .query("filterOperation", operation)
                .query("filterValue", value);
        }
        if let Some(limit) = self.limit {
            options = options.query("limit", limit.to_string());
        }
        if self.ignore_error {
            options = options.query("ignoreError", "true");
        }

        Ok(DeviceRequest::get("/").with_options(options))
    }
}

/// Builder for a MIB write, sent as a form POST.
///
/// Each field becomes `mibObject<N>: "<field>:<value>"`. Some tables want a
/// tag on the key (`mibObject0-T1`); set it with [`tag`](Self::tag).
#[derive(Debug, Clone)]
pub struct MibWrite {
    urn: String,
    tag: Option<String>,
    fields: Vec<(String, String)>,
}

impl MibWrite {
    /// Start a write to one table.
    pub fn new(urn: impl Into<String>) -> Self {
        Self {
            urn: urn.into(),
            tag: None,
            fields: Vec::new(),
        }
    }

    /// Suffix every form key with `-<tag>`.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set a field.
    pub fn set(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((field.into(), value.to_string()));
        self
    }

    /// Set a field only when a value is present.
    pub fn set_opt<V: ToString>(self, field: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(field, value),
            None => self,
        }
    }

    /// Number of fields set so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields were set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Turn the write into a POST request.
    pub fn into_request(self) -> DeviceRequest {
        let mut options = RequestOptions::new()
            .query("domain", "mib")
            .query("urn", &self.urn);

        for (index, (field, value)) in self.fields.iter().enumerate() {
            let key = match &self.tag {
                Some(tag) => format!("mibObject{}-{}", index, tag),
                None => format!("mibObject{}", index),
            };
            options = options.form(key, format!("{}:{}", field, value));
        }

        DeviceRequest::post("/").with_options(options)
    }
}

/// Reject zero row limits.
pub fn validate_limit(limit: u32) -> Result<(), ValidationError> {
    if limit == 0 {
        return Err(ValidationError::OutOfRange {
            field: "limit",
            value: 0,
            min: 1,
            max: i64::from(u32::MAX),
        });
    }
    Ok(())
}
