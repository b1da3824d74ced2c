//! Template renderer
//!
//! Turns one validated candidate into the source text of its wiring type.
//! Rendering is a pure function of (package, declaration name, factory
//! method name, resolved arity, contract): identical inputs always produce
//! identical bytes, which is what makes golden-file testing possible.
//!
//! Only ever invoked on validated candidates; validation reasons never
//! reach this module.

use crate::contract::FrameworkContract;
use crate::model::{Declaration, Method, Unit};
use crate::validate::FactoryArity;

/// Rendered source text for one successful candidate, tagged with the
/// originating declaration and the generated type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Qualified name of the declaration this artifact was generated for.
    pub declaration: String,

    /// Simple name of the generated type (declaration name + suffix).
    pub type_name: String,

    /// Complete source text of the generated type.
    pub text: String,
}

/// Render the wiring type for a validated candidate.
pub fn render_activity(
    unit: &Unit,
    declaration: &Declaration,
    method: &Method,
    arity: FactoryArity,
    contract: &FrameworkContract,
) -> GeneratedArtifact {
    let type_name = contract.generated_type_name(&declaration.name);

    // The call site is the only per-candidate branch: a unary factory
    // receives the place the framework resolved for this activity.
    let call = match arity {
        FactoryArity::Nullary => format!("realPresenter.{}()", method.name),
        FactoryArity::Unary => format!("realPresenter.{}(this.place)", method.name),
    };

    let text = format!(
        r#"/*
 * Generated by vista. Do not edit.
 */
package {package};

public class {type_name} extends {base} {{

    @Inject
    private {presenter} realPresenter;

    @Override
    public {return_type} {factory}() {{
        return {call};
    }}
}}
"#,
        package = unit.package,
        type_name = type_name,
        base = contract.base_type,
        presenter = declaration.name,
        return_type = contract.return_type,
        factory = method.name,
        call = call,
    );

    GeneratedArtifact {
        declaration: unit.qualified_name(declaration),
        type_name,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parameter;

    fn fixture() -> (Unit, FrameworkContract) {
        let unit = Unit::new("org.example.client").with_declaration(
            Declaration::new("HomePerspective")
                .with_annotation("Perspective")
                .with_method(Method::new("getPerspective", "PerspectiveDefinition")),
        );
        (unit, FrameworkContract::default())
    }

    #[test]
    fn test_render_nullary_call_site() {
        let (unit, contract) = fixture();
        let decl = &unit.declarations[0];
        let method = decl.method("getPerspective").unwrap();

        let artifact = render_activity(&unit, decl, method, FactoryArity::Nullary, &contract);

        assert_eq!(artifact.type_name, "HomePerspectiveActivity");
        assert_eq!(artifact.declaration, "org.example.client.HomePerspective");
        assert!(artifact.text.contains("return realPresenter.getPerspective();"));
        assert!(!artifact.text.contains("this.place"));
    }

    #[test]
    fn test_render_unary_call_site_passes_place() {
        let unit = Unit::new("org.example.client").with_declaration(
            Declaration::new("DashboardPerspective")
                .with_annotation("Perspective")
                .with_method(
                    Method::new("getPerspective", "PerspectiveDefinition")
                        .with_param(Parameter::new("place", "PlaceRequest")),
                ),
        );
        let contract = FrameworkContract::default();
        let decl = &unit.declarations[0];
        let method = decl.method("getPerspective").unwrap();

        let artifact = render_activity(&unit, decl, method, FactoryArity::Unary, &contract);

        assert!(artifact
            .text
            .contains("return realPresenter.getPerspective(this.place);"));
    }

    #[test]
    fn test_render_embeds_package_unchanged() {
        let (unit, contract) = fixture();
        let decl = &unit.declarations[0];
        let method = decl.method("getPerspective").unwrap();

        let artifact = render_activity(&unit, decl, method, FactoryArity::Nullary, &contract);

        assert!(artifact.text.contains("package org.example.client;"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let (unit, contract) = fixture();
        let decl = &unit.declarations[0];
        let method = decl.method("getPerspective").unwrap();

        let first = render_activity(&unit, decl, method, FactoryArity::Nullary, &contract);
        let second = render_activity(&unit, decl, method, FactoryArity::Nullary, &contract);

        assert_eq!(first.text, second.text);
    }

    #[test]
    fn test_render_full_text_shape() {
        let (unit, contract) = fixture();
        let decl = &unit.declarations[0];
        let method = decl.method("getPerspective").unwrap();

        let artifact = render_activity(&unit, decl, method, FactoryArity::Nullary, &contract);

        let expected = "/*\n * Generated by vista. Do not edit.\n */\npackage org.example.client;\n\npublic class HomePerspectiveActivity extends AbstractPerspectiveActivity {\n\n    @Inject\n    private HomePerspective realPresenter;\n\n    @Override\n    public PerspectiveDefinition getPerspective() {\n        return realPresenter.getPerspective();\n    }\n}\n";
        assert_eq!(artifact.text, expected);
    }
}
