//! WGSL source for presenting the software canvas.

/// Fullscreen triangle that copies the canvas onto the swapchain.
pub const BLIT_SHADER: &str = r#"
struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@group(0) @binding(0)
var canvas: texture_2d<f32>;
@group(0) @binding(1)
var canvas_sampler: sampler;

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOutput {
    var positions = array<vec2<f32>, 3>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(3.0, -1.0),
        vec2<f32>(-1.0, 3.0),
    );
    var uvs = array<vec2<f32>, 3>(
        vec2<f32>(0.0, 1.0),
        vec2<f32>(2.0, 1.0),
        vec2<f32>(0.0, -1.0),
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(positions[vertex_index], 0.0, 1.0);
    out.uv = uvs[vertex_index];
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let color = textureSample(canvas, canvas_sampler, in.uv);
    return vec4<f32>(color.rgb, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(source: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(source)
            .map_err(|e| format!("parse error: {}", e.emit_to_string(source)))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("validation error: {:?}", e))?;
        Ok(())
    }

    #[test]
    fn test_blit_shader_validates() {
        if let Err(e) = validate(BLIT_SHADER) {
            panic!("{}", e);
        }
    }

    #[test]
    fn test_blit_entry_points_present() {
        let module = naga::front::wgsl::parse_str(BLIT_SHADER).unwrap();
        let names: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"vs_main"));
        assert!(names.contains(&"fs_main"));
    }

    #[test]
    fn test_blit_binds_texture_and_sampler() {
        let module = naga::front::wgsl::parse_str(BLIT_SHADER).unwrap();
        let mut bindings: Vec<(Option<String>, u32)> = module
            .global_variables
            .iter()
            .filter_map(|(_, var)| var.binding.as_ref().map(|b| (var.name.clone(), b.binding)))
            .collect();
        bindings.sort_by_key(|(_, binding)| *binding);

        assert_eq!(
            bindings,
            vec![
                (Some("canvas".to_string()), 0),
                (Some("canvas_sampler".to_string()), 1),
            ]
        );
    }
}
