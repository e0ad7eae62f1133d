//! Shared fixtures for tests: small Unreal project trees on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Switches the process working directory for the guard's lifetime.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; serialize even if #[serial] is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Write a file, creating parent directories.
pub(crate) fn write_file(path: &Path, content: impl AsRef<[u8]>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A descriptor with no code modules.
pub(crate) fn blueprint_descriptor() -> String {
    r#"{
	"FileVersion": 3,
	"EngineAssociation": "5.4",
	"Category": "",
	"Description": ""
}
"#
    .to_string()
}

/// A descriptor listing one runtime module called `name`.
pub(crate) fn cpp_descriptor(name: &str) -> String {
    format!(
        r#"{{
	"FileVersion": 3,
	"EngineAssociation": "5.4",
	"Modules": [
		{{
			"Name": "{name}",
			"Type": "Runtime",
			"LoadingPhase": "Default"
		}}
	]
}}
"#
    )
}

/// Create `<root>/<name>/<name>.uproject` plus a little content.
///
/// Returns the temp dir (the project root) and the project directory.
pub(crate) fn create_blueprint_project(name: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let project_dir = temp.path().join(name);

    write_file(
        &project_dir.join(format!("{name}.uproject")),
        blueprint_descriptor(),
    );
    write_file(&project_dir.join("Content/Maps/Main.umap"), "map-data");
    write_file(
        &project_dir.join("Config/DefaultEngine.ini"),
        "[/Script/EngineSettings.GameMapsSettings]\nEditorStartupMap=/Game/Maps/Main.Main\n",
    );
    write_file(
        &project_dir.join("Config/DefaultGame.ini"),
        format!(
            "[/Script/EngineSettings.GeneralProjectSettings]\nProjectID=1234\nProjectName={name}\n"
        ),
    );

    (temp, project_dir)
}

/// Create a C++ project with one primary module named after the project and
/// the usual target files.
pub(crate) fn create_cpp_project(name: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let project_dir = temp.path().join(name);
    let upper = name.to_uppercase();
    let source = project_dir.join("Source");
    let module = source.join(name);

    write_file(
        &project_dir.join(format!("{name}.uproject")),
        cpp_descriptor(name),
    );
    write_file(
        &project_dir.join("Config/DefaultEngine.ini"),
        format!(
            "[/Script/Engine.Engine]\r\nNearClipPlane=10.0\r\n\r\n[/Script/Engine.CollisionProfile]\r\n+Profiles=(Name=\"{name}Pawn\")\r\n"
        ),
    );
    write_file(
        &project_dir.join("Config/DefaultGame.ini"),
        format!("[/Script/EngineSettings.GeneralProjectSettings]\nProjectName={name}\n"),
    );
    write_file(
        &source.join(format!("{name}.Target.cs")),
        format!(
            "using UnrealBuildTool;\n\npublic class {name}Target : TargetRules\n{{\n\tpublic {name}Target(TargetInfo Target) : base(Target)\n\t{{\n\t\tType = TargetType.Game;\n\t\tExtraModuleNames.Add(\"{name}\");\n\t}}\n}}\n"
        ),
    );
    write_file(
        &source.join(format!("{name}Editor.Target.cs")),
        format!(
            "using UnrealBuildTool;\n\npublic class {name}EditorTarget : TargetRules\n{{\n\tpublic {name}EditorTarget(TargetInfo Target) : base(Target)\n\t{{\n\t\tType = TargetType.Editor;\n\t\tExtraModuleNames.Add(\"{name}\");\n\t}}\n}}\n"
        ),
    );
    write_file(
        &module.join(format!("{name}.Build.cs")),
        format!(
            "using UnrealBuildTool;\n\npublic class {name} : ModuleRules\n{{\n\tpublic {name}(ReadOnlyTargetRules Target) : base(Target)\n\t{{\n\t\tPublicDependencyModuleNames.AddRange(new string[] {{ \"Core\", \"Engine\" }});\n\t}}\n}}\n"
        ),
    );
    write_file(
        &module.join(format!("{name}.h")),
        "#pragma once\n\n#include \"CoreMinimal.h\"\n",
    );
    write_file(
        &module.join(format!("{name}.cpp")),
        format!(
            "#include \"{name}.h\"\n#include \"Modules/ModuleManager.h\"\n\nIMPLEMENT_PRIMARY_GAME_MODULE( FDefaultGameModuleImpl, {name}, \"{name}\" );\n"
        ),
    );
    write_file(
        &module.join(format!("Public/{name}Character.h")),
        format!(
            "#pragma once\n\n#include \"GameFramework/Character.h\"\n#include \"{name}Character.generated.h\"\n\nUCLASS()\nclass {upper}_API A{name}Character : public ACharacter\n{{\n\tGENERATED_BODY()\n}};\n"
        ),
    );
    write_file(
        &module.join(format!("Private/{name}Character.cpp")),
        format!("#include \"{name}Character.h\"\n"),
    );
    write_file(&project_dir.join("Binaries/Win64/placeholder.dll"), "dll");
    write_file(&project_dir.join("Intermediate/Build/placeholder.obj"), "obj");

    (temp, project_dir)
}
