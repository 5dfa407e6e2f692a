//! Generated invocation wrappers.
//!
//! Each packaged page gets a thin JavaScript wrapper next to its compiled
//! asset. The wrapper requires the `.original` module, adapts the invocation
//! event onto a Node-style `(req, res)` pair, and exports the `render` entry
//! point the function resource's handler references. It is self-contained so
//! the archive stays at exactly two entries per page.

use lift_routes::RoutePath;

/// Render the wrapper module source for a route.
pub fn render_wrapper(route: &RoutePath) -> String {
    let basename = route.basename();
    format!(
        r#""use strict";

// Generated wrapper: bridges the invocation event onto the compiled page's
// Node-style render(req, res) entry point.

const page = require("./{basename}.original.js");

const compat = (event, callback) => {{
  const {{ Readable }} = require("stream");

  const req = new Readable();
  req.url = event.path || "/";
  req.method = event.httpMethod || "GET";
  req.headers = event.headers || {{}};
  req.push(event.body || null);
  req.push(null);

  const chunks = [];
  const res = {{
    statusCode: 200,
    headers: {{}},
    setHeader(name, value) {{
      this.headers[name.toLowerCase()] = value;
    }},
    getHeader(name) {{
      return this.headers[name.toLowerCase()];
    }},
    removeHeader(name) {{
      delete this.headers[name.toLowerCase()];
    }},
    writeHead(statusCode, headers) {{
      this.statusCode = statusCode;
      Object.assign(this.headers, headers);
    }},
    write(chunk) {{
      chunks.push(Buffer.from(chunk));
    }},
    end(chunk) {{
      if (chunk) {{
        chunks.push(Buffer.from(chunk));
      }}
      callback(null, {{
        statusCode: this.statusCode,
        headers: this.headers,
        body: Buffer.concat(chunks).toString("utf8")
      }});
    }}
  }};

  return {{ req, res }};
}};

module.exports.render = (event, context, callback) => {{
  const {{ req, res }} = compat(event, callback);
  page.render(req, res);
}};
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_the_original_module_by_basename() {
        let route = RoutePath::parse("blog/post").unwrap();
        let source = render_wrapper(&route);
        assert!(source.contains(r#"require("./post.original.js")"#));
    }

    #[test]
    fn exports_the_render_entry_point() {
        let route = RoutePath::parse("about").unwrap();
        let source = render_wrapper(&route);
        assert!(source.contains("module.exports.render = (event, context, callback)"));
        assert!(source.contains("page.render(req, res)"));
    }

    #[test]
    fn output_is_deterministic() {
        let route = RoutePath::parse("docs/api").unwrap();
        assert_eq!(render_wrapper(&route), render_wrapper(&route));
    }
}
