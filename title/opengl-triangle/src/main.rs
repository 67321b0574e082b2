use std::{
    ffi::{CString, c_void},
    process::ExitCode,
    ptr::{null, null_mut},
    thread,
    time::Duration,
};

use anyhow::{Context, Result, bail};
use gl::types::{GLchar, GLenum, GLint, GLsizeiptr, GLuint};
use log::info;

use sdl::{GlContext, InitFlags, Rect, WINDOWPOS_CENTERED, Window, WindowFlags};

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 768;

const VERTEX_SHADER: &str = "#version 120

attribute vec3 aPosition;
attribute vec3 aColor;

uniform mat4 uProjMatrix;
uniform mat4 uViewMatrix;
uniform mat4 uModelMatrix;

varying vec3 vColor;

void main() {
    gl_Position = uProjMatrix * uViewMatrix * uModelMatrix * vec4(aPosition, 1.0);
    vColor = aColor;
}
";

const FRAGMENT_SHADER: &str = "#version 120

varying vec3 vColor;

void main() {
    gl_FragColor = vec4(vColor, 1.0);
}
";

const TRIANGLE_POSITIONS: [[f32; 3]; 3] = [[2.0, 0.0, -5.0], [0.0, 4.0, -5.0], [-2.0, 0.0, -5.0]];
const TRIANGLE_COLORS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, //
];

/// Column-major perspective projection with the view centered on the z axis.
fn symmetric_projection(fovy: f32, aspect: f32, near: f32, far: f32) -> [f32; 16] {
    let top = (fovy / 2.0).tan() * near;
    let right = top * aspect;

    let mut m = [0.0; 16];
    m[0] = near / right;
    m[5] = near / top;
    m[10] = -(far + near) / (far - near);
    m[11] = -1.0;
    m[14] = (-2.0 * far * near) / (far - near);
    m
}

fn check_gl(stage: &str) -> Result<()> {
    let error = match unsafe { gl::GetError() } {
        gl::NO_ERROR => return Ok(()),
        gl::INVALID_ENUM => "invalid enum",
        gl::INVALID_VALUE => "invalid value",
        gl::INVALID_OPERATION => "invalid operation",
        gl::INVALID_FRAMEBUFFER_OPERATION => "invalid framebuffer operation",
        gl::OUT_OF_MEMORY => "out of memory",
        gl::STACK_UNDERFLOW => "stack underflow",
        gl::STACK_OVERFLOW => "stack overflow",
        other => bail!("unknown GL error {other:#x} at {stage}"),
    };
    bail!("{error} at {stage}")
}

fn compile_shader(ty: GLenum, src: &str) -> Result<GLuint> {
    let c_src = CString::new(src)?;
    unsafe {
        let handle = gl::CreateShader(ty);
        if handle == 0 {
            bail!("unable to create shader stage");
        }
        gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
        gl::CompileShader(handle);

        let mut compiled = GLint::from(gl::FALSE);
        gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);
        if compiled == GLint::from(gl::TRUE) {
            return Ok(handle);
        }

        let mut log_len = 0;
        gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);
        let mut log = vec![0u8; log_len.max(1) as usize];
        gl::GetShaderInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);
        gl::DeleteShader(handle);
        bail!(
            "shader compilation failed: {}",
            String::from_utf8_lossy(&log).trim_end_matches('\0')
        )
    }
}

fn link_program(shaders: &[GLuint]) -> Result<GLuint> {
    unsafe {
        let program = gl::CreateProgram();
        for &shader in shaders {
            gl::AttachShader(program, shader);
        }
        gl::LinkProgram(program);

        let mut linked = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut linked);
        if linked == GLint::from(gl::TRUE) {
            return Ok(program);
        }

        let mut log_len = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut log_len);
        let mut log = vec![0u8; log_len.max(1) as usize];
        gl::GetProgramInfoLog(program, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);
        gl::DeleteProgram(program);
        bail!(
            "program link failed: {}",
            String::from_utf8_lossy(&log).trim_end_matches('\0')
        )
    }
}

fn attrib_location(program: GLuint, name: &str) -> Result<GLuint> {
    let c_name = CString::new(name)?;
    let location = unsafe { gl::GetAttribLocation(program, c_name.as_ptr()) };
    if location < 0 {
        bail!("attribute `{name}` not found");
    }
    Ok(location as GLuint)
}

fn uniform_location(program: GLuint, name: &str) -> Result<GLint> {
    let c_name = CString::new(name)?;
    let location = unsafe { gl::GetUniformLocation(program, c_name.as_ptr()) };
    if location < 0 {
        bail!("uniform `{name}` not found");
    }
    Ok(location)
}

fn upload(data: &[[f32; 3]; 3]) -> GLuint {
    let mut buffer = 0;
    unsafe {
        gl::GenBuffers(1, &mut buffer);
        gl::BindBuffer(gl::ARRAY_BUFFER, buffer);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            size_of_val(data) as GLsizeiptr,
            data.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        );
    }
    buffer
}

fn draw() -> Result<()> {
    unsafe {
        gl::ClearColor(0.0, 0.0, 0.0, 0.0);
        gl::ClearDepth(1.0);
        gl::DepthFunc(gl::LEQUAL);
        gl::Enable(gl::DEPTH_TEST);
    }
    check_gl("initialization")?;

    let vertex = compile_shader(gl::VERTEX_SHADER, VERTEX_SHADER)?;
    let fragment = compile_shader(gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
    let program = link_program(&[vertex, fragment])?;
    check_gl("shader program creation")?;

    let position_attrib = attrib_location(program, "aPosition")?;
    let color_attrib = attrib_location(program, "aColor")?;
    let proj_uniform = uniform_location(program, "uProjMatrix")?;
    let view_uniform = uniform_location(program, "uViewMatrix")?;
    let model_uniform = uniform_location(program, "uModelMatrix")?;

    let position_buffer = upload(&TRIANGLE_POSITIONS);
    let color_buffer = upload(&TRIANGLE_COLORS);
    check_gl("buffer upload")?;

    let projection = symmetric_projection(1.396, 4.0 / 3.0, 0.01, 100.0);

    unsafe {
        gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        gl::UseProgram(program);

        gl::UniformMatrix4fv(proj_uniform, 1, gl::FALSE, projection.as_ptr());
        gl::UniformMatrix4fv(view_uniform, 1, gl::FALSE, IDENTITY.as_ptr());
        gl::UniformMatrix4fv(model_uniform, 1, gl::FALSE, IDENTITY.as_ptr());
    }
    check_gl("uniform upload")?;

    unsafe {
        gl::EnableVertexAttribArray(position_attrib);
        gl::BindBuffer(gl::ARRAY_BUFFER, position_buffer);
        gl::VertexAttribPointer(position_attrib, 3, gl::FLOAT, gl::FALSE, 0, null());

        gl::EnableVertexAttribArray(color_attrib);
        gl::BindBuffer(gl::ARRAY_BUFFER, color_buffer);
        gl::VertexAttribPointer(color_attrib, 3, gl::FLOAT, gl::FALSE, 0, null());

        gl::DrawArrays(gl::TRIANGLES, 0, 3);

        gl::DisableVertexAttribArray(position_attrib);
        gl::DisableVertexAttribArray(color_attrib);
        gl::UseProgram(0);
    }
    check_gl("draw")?;

    unsafe {
        gl::DeleteBuffers(1, &position_buffer);
        gl::DeleteBuffers(1, &color_buffer);
        gl::DeleteProgram(program);
        gl::DeleteShader(vertex);
        gl::DeleteShader(fragment);
    }

    Ok(())
}

fn run() -> Result<()> {
    sdl::init(InitFlags::EVERYTHING).context("failed to initialize SDL")?;

    let window = Window::new(
        "opengl-triangle",
        Rect::new(WINDOWPOS_CENTERED, WINDOWPOS_CENTERED, WIDTH, HEIGHT),
        WindowFlags::OPENGL,
    )
    .context("failed to create window")?;
    let context = GlContext::new(&window).context("failed to create GL context")?;
    context.make_current(&window)?;

    gl::load_with(sdl::gl_get_proc_address);
    if !gl::GetError::is_loaded() {
        bail!("unable to load OpenGL functions");
    }

    draw()?;
    window.gl_swap();
    info!("triangle drawn");

    thread::sleep(Duration::from_secs(7));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = run();
    sdl::quit();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(m: &[f32; 16], p: [f32; 3]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, out) in out.iter_mut().enumerate() {
            *out = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
        }
        out
    }

    #[test]
    fn projection_layout() {
        let m = symmetric_projection(1.396, 4.0 / 3.0, 0.01, 100.0);
        let top = (1.396f32 / 2.0).tan();
        assert!((m[0] - 1.0 / (top * 4.0 / 3.0)).abs() < 1e-4);
        assert!((m[5] - 1.0 / top).abs() < 1e-4);
        assert_eq!(m[11], -1.0);
        for i in [1, 2, 3, 4, 6, 7, 8, 9, 12, 13, 15] {
            assert_eq!(m[i], 0.0, "element {i}");
        }
    }

    #[test]
    fn near_and_far_planes_map_to_clip_bounds() {
        let m = symmetric_projection(1.396, 4.0 / 3.0, 0.01, 100.0);

        let near = transform(&m, [0.0, 0.0, -0.01]);
        assert!((near[2] / near[3] + 1.0).abs() < 1e-3);

        let far = transform(&m, [0.0, 0.0, -100.0]);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-3);

        // The whole triangle lands inside the view volume.
        for vertex in TRIANGLE_POSITIONS {
            let clip = transform(&m, vertex);
            for axis in &clip[..3] {
                assert!(axis.abs() <= clip[3], "{vertex:?} -> {clip:?}");
            }
        }
    }
}
