// SPDX-License-Identifier: Apache-2.0

use crate::error_mapping::PROXY_ERROR_SCHEMA_REF;
use serde_json::{json, Value};

#[must_use]
pub fn openapi_spec() -> Value {
    let error = json!({"application/json": {"schema": {"$ref": PROXY_ERROR_SCHEMA_REF}}});
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "catalyst-bridge API",
        "version": "v1"
      },
      "paths": {
        "/documents": {
          "get": {
            "parameters": [
              {"name": "policyNumber", "in": "query", "required": true, "schema": {"type": "string"}}
            ],
            "responses": {
              "200": {
                "description": "normalized documents; an upstream 404 degrades to an empty list with a hint",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/DocumentsResponse"}}}
              },
              "400": {"description": "missing policyNumber", "content": error},
              "500": {"description": "bridge not configured", "content": error},
              "502": {"description": "token or upstream failure", "content": error}
            }
          }
        },
        "/documents/{id}/download": {
          "get": {
            "parameters": [
              {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}},
              {"name": "filename", "in": "query", "schema": {"type": "string"}}
            ],
            "responses": {
              "200": {"description": "document bytes", "content": {"application/octet-stream": {"schema": {"type": "string", "format": "binary"}}}},
              "400": {"description": "missing document id", "content": error},
              "500": {"description": "bridge not configured", "content": error},
              "502": {"description": "token or upstream failure", "content": error}
            }
          }
        },
        "/healthz": {"get": {"responses": {"200": {"description": "ok"}}}},
        "/openapi.json": {"get": {"responses": {"200": {"description": "this document"}}}},
        "/policies/search": {
          "get": {
            "parameters": [
              {"name": "date", "in": "query", "required": true, "schema": {"type": "string", "format": "date"}}
            ],
            "responses": {
              "200": {
                "description": "normalized policy records",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/PolicySearchResponse"}}}
              },
              "400": {"description": "missing date", "content": error},
              "500": {"description": "bridge not configured", "content": error},
              "502": {"description": "token or upstream failure", "content": error}
            }
          }
        },
        "/version": {"get": {"responses": {"200": {"description": "service name and version"}}}}
      },
      "components": {
        "schemas": {
          "DocumentsResponse": {
            "type": "object",
            "required": ["documents"],
            "properties": {
              "documents": {"type": "array", "items": {"$ref": "#/components/schemas/PolicyDocumentRow"}},
              "message": {"type": "string"},
              "error": {"type": "string"},
              "triedUrl": {"type": "string"},
              "hint": {"type": "string"}
            }
          },
          "PolicyDocumentRow": {
            "type": "object",
            "required": ["id", "createdOn", "createdBy", "type", "transaction", "kitId", "documentName", "effectiveDate"],
            "properties": {
              "id": {"type": "string"},
              "createdOn": {"type": "string"},
              "createdBy": {"type": "string"},
              "type": {"type": "string"},
              "transaction": {"type": "string"},
              "kitId": {"type": "string"},
              "documentName": {"type": "string"},
              "effectiveDate": {"type": "string"}
            }
          },
          "PolicySearchResponse": {
            "type": "object",
            "required": ["policies"],
            "properties": {
              "policies": {"type": "array", "items": {"type": "object"}},
              "message": {"type": "string"},
              "error": {"type": "string"},
              "body": {"type": "string"}
            }
          },
          "ProxyErrorEnvelope": {
            "type": "object",
            "required": ["error"],
            "additionalProperties": false,
            "properties": {
              "error": {"type": "string"},
              "status": {"type": "integer"},
              "body": {"type": "string"},
              "hint": {"type": "string"},
              "triedUrl": {"type": "string"}
            }
          }
        }
      }
    })
}
