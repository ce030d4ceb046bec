use clap::{Args, Parser};

/// Images written into the bundle when substitution is enabled
#[derive(Args, Debug, Clone, Default)]
pub struct ImageArgs {
    /// Service image for the bundle's `images` entry
    #[arg(long, value_name = "IMAGE", default_value = "")]
    pub service_image: String,

    /// Invocation image for the bundle's first `invocationImages` entry
    #[arg(long, value_name = "IMAGE", default_value = "")]
    pub invocation_image: String,
}

/// Arguments for the publish command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Publish with the default apitests layout:\n    cnab-publish publish --target reg.example.com/library/app\n\n\
                  Publish without updating the bundle on fixup:\n    cnab-publish publish --target reg.example.com/app --no-auto-update\n\n\
                  Publish with substituted images:\n    cnab-publish publish --target reg.example.com/app --substitute-images \\\n      \
                  --service-image reg.example.com/nginx:1 --invocation-image reg.example.com/inv:1")]
pub struct PublishArgs {
    /// Registry repository to push the bundle to
    #[arg(long, short = 't')]
    pub target: String,

    /// Do not pass --auto-update-bundle to cnab-to-oci fixup
    #[arg(long)]
    pub no_auto_update: bool,

    #[command(flatten)]
    pub images: ImageArgs,
}
