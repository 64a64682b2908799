/// WGSL shader for the rotating solids: one spot light, Lambert diffuse,
/// optional specular highlight, additive emissive.
pub const SCENE_SHADER: &str = r#"
struct Frame {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    light_pos: vec4<f32>,
    light_dir: vec4<f32>,
    light_color: vec4<f32>,
    light_params: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: Frame;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
    @location(7) emissive: vec4<f32>,
    @location(8) params: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
    @location(3) emissive: vec4<f32>,
    @location(4) params: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = frame.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = normalize(world_normal);
    out.color = instance.color;
    out.emissive = instance.emissive;
    out.params = instance.params;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let to_light = frame.light_pos.xyz - in.world_pos;
    let dist = length(to_light);
    let l = to_light / max(dist, 1e-4);

    // light_color.w = intensity, light_params = (range, cos(half angle), -, -)
    var atten = frame.light_color.w / max(dist * dist, 1e-4);
    atten = atten * clamp(1.0 - dist / frame.light_params.x, 0.0, 1.0);
    if (dot(-l, frame.light_dir.xyz) < frame.light_params.y) {
        atten = 0.0;
    }

    let diffuse = max(dot(n, l), 0.0);
    var lit = in.color.rgb * frame.light_color.rgb * diffuse * atten;

    // params.x flags specular-bearing materials.
    if (in.params.x > 0.5) {
        let v = normalize(frame.camera_pos.xyz - in.world_pos);
        let h = normalize(l + v);
        lit = lit + frame.light_color.rgb * pow(max(dot(n, h), 0.0), 32.0) * atten;
    }

    return vec4<f32>(in.emissive.rgb + lit, 1.0);
}
"#;
