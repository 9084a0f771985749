//! List-options command - Print the option catalog.

use anyhow::Result;

use forge_config::{
    CiPlatform, DeployMethod, InfraTool, ObservabilityLevel, SecurityLevel,
};

pub fn execute() -> Result<()> {
    println!("Available options");
    println!();

    section("--ci            CI/CD platform (default: none)", &CiPlatform::VALUES, &[
        "GitHub Actions workflows",
        "GitLab CI/CD pipelines",
        "Jenkins pipeline files",
        "No CI/CD",
    ]);

    section("--infra         Infrastructure tool (default: none)", &InfraTool::VALUES, &[
        "Terraform IaC",
        "AWS CloudFormation",
        "No IaC",
    ]);

    section("--deploy        Deployment method (required)", &DeployMethod::VALUES, &[
        "Virtual machine deployment",
        "Docker container deployment",
        "Kubernetes deployment",
    ]);

    println!("--envs          Environments (default: single)");
    println!("    single            Single environment");
    println!("    dev,stage,prod    Comma-separated multi-environment setup");
    println!();

    section(
        "--observability Observability level (default: logs)",
        &ObservabilityLevel::VALUES,
        &["Logs only", "Logs + metrics", "Logs + metrics + alerts"],
    );

    section("--security      Security level (default: basic)", &SecurityLevel::VALUES, &[
        "Basic security practices",
        "Standard security measures",
        "Strict security controls",
    ]);

    println!("--name          Project name (default: devops-project)");

    Ok(())
}

fn section(header: &str, values: &[&str], descriptions: &[&str]) {
    println!("{}", header);
    for (value, description) in values.iter().zip(descriptions) {
        println!("    {:<18}{}", value, description);
    }
    println!();
}
