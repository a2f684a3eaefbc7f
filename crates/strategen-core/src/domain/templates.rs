//! Fixed C# output templates.
//!
//! Every generated file is a direct, non-recursive substitution of schema
//! fields into the string templates below. The guard bodies are the only
//! branching logic in the whole system: each kind tests its criterion for
//! presence and falls through to `return null;` when it is absent.
//!
//! Whitespace in the emitted text is part of the contract — re-running
//! generation with the same schema must produce byte-identical files.

use crate::domain::schema::{Entity, GlobalSettings, LogicKind};

/// File extension for every generated file.
pub const FILE_EXTENSION: &str = "cs";

/// Name of the aggregated dependency-registration file (without extension).
pub const INJECTOR_NAME: &str = "DomainServiceInjector";

/// `I{Context}Strategy`
pub fn interface_name(context_name: &str) -> String {
    format!("I{context_name}Strategy")
}

/// `{PropertyRef}{Context}Strategy`
pub fn class_name(property_ref: &str, context_name: &str) -> String {
    format!("{property_ref}{context_name}Strategy")
}

impl LogicKind {
    /// Guard-clause body for a strategy implementation.
    ///
    /// The dispatch is exhaustive over the closed kind set; there is no
    /// fall-through arm to silently drop an unmatched kind.
    pub fn guard_body(&self, property_ref: &str, target_entity: &str) -> String {
        let p = property_ref;
        let e = target_entity;
        match self {
            Self::DateTime => format!(
                "if (criteria.{p}.HasValue)
         {{
            Expression<Func<{e}, bool>> filterExpression = p =>
                p.{p}.HasValue &&
                p.{p}.Value.Year == criteria.{p}.Value.Year &&
                p.{p}.Value.Month == criteria.{p}.Value.Month &&
                p.{p}.Value.Day == criteria.{p}.Value.Day;

            return Builders<{e}>.Filter.Where(filterExpression);
         }}
         return null;"
            ),
            Self::StringRegex => format!(
                "if (null != criteria.{p})
        {{
            var builder = Builders<{e}>.Filter;
            return builder.Regex(p => p.{p}, new BsonRegularExpression(criteria.{p}, \"i\"));
        }}
        return null;"
            ),
            Self::GenericEquality => format!(
                "if (criteria.{p} != null)
            {{
                return Builders<{e}>.Filter.Eq(p => p.{p}, criteria.{p});
            }}
            return null;"
            ),
        }
    }
}

/// Entity class file: one attribute-annotated field per property, with the
/// optional default suffix appended verbatim.
pub fn entity_file(settings: &GlobalSettings, entity: &Entity) -> String {
    let props: String = entity
        .properties
        .iter()
        .map(|p| {
            format!(
                "\n    [BsonElement(\"{name}\")]\n    public {ty} {name} {{ get; set; }}{default}",
                name = p.name,
                ty = p.type_name,
                default = p.default.as_deref().unwrap_or("")
            )
        })
        .collect();

    format!(
        "using System;
using MongoDB.Bson;
using MongoDB.Bson.Serialization.Attributes;

namespace {domain}.Entities.v1;

public class {name}
{{{props}
}}",
        domain = settings.root_namespace_domain,
        name = entity.name,
    )
}

/// Strategy interface file: declares the single filter-creation operation.
pub fn interface_file(settings: &GlobalSettings, context_name: &str, target_entity: &str) -> String {
    format!(
        "using MongoDB.Driver;
using {domain}.Entities.v1;

namespace {domain}.Interfaces.v1.Strategies;

public interface {interface}
{{
    FilterDefinition<{entity}>? CreateFilter({entity} filter);
}}",
        domain = settings.root_namespace_domain,
        interface = interface_name(context_name),
        entity = target_entity,
    )
}

/// Strategy implementation file wrapping a guard body for one property.
pub fn implementation_file(
    settings: &GlobalSettings,
    context_name: &str,
    target_entity: &str,
    property_ref: &str,
    kind: LogicKind,
) -> String {
    format!(
        "using System;
using MongoDB.Driver;
using {domain}.Entities.v1;
using {domain}.Interfaces.v1.Strategies;

namespace {domain}.Services.v1.Strategies.{context}Strategies;

public class {class} : {interface}
{{
    public FilterDefinition<{entity}>? CreateFilter({entity} criteria)
    {{
        {body}
    }}
}}",
        domain = settings.root_namespace_domain,
        context = context_name,
        class = class_name(property_ref, context_name),
        interface = interface_name(context_name),
        entity = target_entity,
        body = kind.guard_body(property_ref, target_entity),
    )
}

/// Aggregated dependency-registration file.
///
/// `registrations` pairs each contributing context with the classes it
/// actually produced; contexts with no recognized strategies must not appear.
pub fn injector_file(settings: &GlobalSettings, registrations: &[(String, Vec<String>)]) -> String {
    let usings: String = registrations
        .iter()
        .map(|(context, _)| {
            format!(
                "using {domain}.Services.v1.Strategies.{context}Strategies;",
                domain = settings.root_namespace_domain,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body: String = registrations
        .iter()
        .map(|(context, classes)| {
            let typeofs = classes
                .iter()
                .map(|c| format!("typeof({c})"))
                .collect::<Vec<_>>()
                .join(",\n            ");
            format!(
                "        container.Collection.Register<{interface}>(\n            {typeofs}\n        );",
                interface = interface_name(context),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "using SimpleInjector;
{usings}

namespace {api}.Infrastructure.IoC;

public static class {injector}
{{
    public static void InjectStrategyDependencies(this Container container)
    {{
{body}
    }}
}}",
        api = settings.root_namespace_api,
        injector = INJECTOR_NAME,
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────
