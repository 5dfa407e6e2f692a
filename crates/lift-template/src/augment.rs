//! The Template Augmenter.
//!
//! Expands a route set into template resources. For every route this adds:
//!
//! - one `AWS::Lambda::Function` resource whose handler points at the
//!   packaged wrapper module,
//! - one `AWS::ApiGateway::Resource` per path segment, chained by `ParentId`
//!   and deduplicated by logical ID so sibling and unrelated routes sharing a
//!   prefix reuse the same nodes,
//! - one `AWS::ApiGateway::Method` per supported verb, bound to the deepest
//!   path resource and integrated with the function.
//!
//! A single `AWS::ApiGateway::RestApi` anchors the chains; it is created only
//! if the base template does not already carry one.

use serde_json::{Value, json};
use tracing::debug;

use lift_routes::{Route, naming};

use crate::error::Result;
use crate::template::Template;

/// Settings the generated resources are parameterized on.
#[derive(Debug, Clone)]
pub struct AugmentOptions {
    /// Deployed service name; prefixes function names and names the REST API.
    pub service: String,
    /// Archive-internal prefix the packaged handlers live under.
    pub build_dir: String,
    /// Function runtime identifier.
    pub runtime: String,
    /// Function memory, in MB.
    pub memory_size: u32,
    /// Function timeout, in seconds.
    pub timeout: u32,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        AugmentOptions {
            service: "app".to_string(),
            build_dir: "lift-build".to_string(),
            runtime: "nodejs18.x".to_string(),
            memory_size: 1024,
            timeout: 6,
        }
    }
}

/// Enrich `template` with the resources for `routes`.
///
/// Identical re-runs converge on the same document; a logical ID already
/// occupied by different content surfaces as a merge conflict.
pub fn augment(template: &mut Template, routes: &[Route], options: &AugmentOptions) -> Result<()> {
    // The REST API anchors every chain; a base template may already carry
    // its own (with provider-specific properties), so only create one when
    // absent instead of insisting on our shape.
    if template.get(naming::REST_API_LOGICAL_ID).is_none() {
        template.insert(
            naming::REST_API_LOGICAL_ID,
            json!({
                "Type": "AWS::ApiGateway::RestApi",
                "Properties": {
                    "Name": options.service
                }
            }),
        )?;
    }

    for route in routes {
        add_function(template, route, options)?;
        let deepest = add_resource_chain(template, route)?;
        add_methods(template, route, &deepest, options)?;
        debug!(route = %route.path, "augmented template");
    }

    Ok(())
}

fn add_function(template: &mut Template, route: &Route, options: &AugmentOptions) -> Result<()> {
    let logical_id = naming::function_logical_id(&route.path);
    template.insert(
        &logical_id,
        json!({
            "Type": "AWS::Lambda::Function",
            "Properties": {
                "FunctionName": format!("{}-{}", options.service, route.path.function_name()),
                "Handler": format!("{}/{}.render", options.build_dir, route.path),
                "Runtime": options.runtime,
                "MemorySize": options.memory_size,
                "Timeout": options.timeout
            }
        }),
    )
}

/// Insert the path-segment chain for a route and return the logical ID of
/// its deepest resource.
fn add_resource_chain(template: &mut Template, route: &Route) -> Result<String> {
    let mut parent = json!({
        "Fn::GetAtt": [naming::REST_API_LOGICAL_ID, "RootResourceId"]
    });
    let mut logical_id = String::new();

    for (prefix, segment) in route.path.prefixes().zip(route.path.segments()) {
        logical_id = naming::resource_logical_id(prefix);
        template.insert(
            &logical_id,
            json!({
                "Type": "AWS::ApiGateway::Resource",
                "Properties": {
                    "ParentId": parent,
                    "PathPart": segment,
                    "RestApiId": { "Ref": naming::REST_API_LOGICAL_ID }
                }
            }),
        )?;
        parent = json!({ "Ref": logical_id });
    }

    Ok(logical_id)
}

fn add_methods(
    template: &mut Template,
    route: &Route,
    resource_id: &str,
    options: &AugmentOptions,
) -> Result<()> {
    let function_id = naming::function_logical_id(&route.path);
    for &method in &route.methods {
        template.insert(
            &naming::method_logical_id(&route.path, method),
            json!({
                "Type": "AWS::ApiGateway::Method",
                "Properties": {
                    "HttpMethod": method.as_str(),
                    "ResourceId": { "Ref": resource_id },
                    "RestApiId": { "Ref": naming::REST_API_LOGICAL_ID },
                    "AuthorizationType": "NONE",
                    "Integration": {
                        "Type": "AWS_PROXY",
                        "IntegrationHttpMethod": "POST",
                        "Uri": invocation_uri(&function_id)
                    }
                }
            }),
        )?;
    }
    Ok(())
}

fn invocation_uri(function_logical_id: &str) -> Value {
    json!({
        "Fn::Join": ["", [
            "arn:aws:apigateway:",
            { "Ref": "AWS::Region" },
            ":lambda:path/2015-03-31/functions/",
            { "Fn::GetAtt": [function_logical_id, "Arn"] },
            "/invocations"
        ]]
    })
}
