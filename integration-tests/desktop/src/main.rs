use colored::Colorize as _;
use learnopengl_glfw::GlfwSurface;
use learnopengl_windowing::WindowOpt;

macro_rules! tests {
  ($($name:expr, $module:ident),*) => {
    // declare the modules for all tests
    $(
      mod $module;
    )*

    // list of all available integration tests
    const TEST_NAMES: &[&str] = &[$( $name ),*];

    // run a given test
    fn run_test(name: &str) {
      $(
        if name == $name {
          $module::fixture();
          println!("{} passed", name.green());
          return;
        }
      )*

      else {
        println!("{} is not a valid test. Possible values", name.red());

        for test_name in TEST_NAMES {
          println!("  -> {}", test_name.blue());
        }
      }
    }
  }
}

tests! {
  "shader-compile-error", shader_compile_error,
  "shader-link-error", shader_link_error,
  "shader-uniforms", shader_uniforms,
  "texture-load", texture_load,
  "single-gl-state", single_gl_state
}

/// Fixtures don’t need to show anything: the window stays hidden.
pub fn hidden_surface(title: &str) -> GlfwSurface {
  GlfwSurface::new_gl33(title, WindowOpt::default().set_visible(false)).expect("GLFW surface")
}

fn main() {
  let test_name = std::env::args().skip(1).next();

  if let Some(test_name) = test_name {
    println!("test name: {}", test_name.green());

    run_test(&test_name);
  } else {
    println!("Please provide a test name. Possible values");

    for test_name in TEST_NAMES {
      println!("  -> {}", test_name.blue());
    }
  }
}
