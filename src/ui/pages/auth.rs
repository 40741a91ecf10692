//! Login and register forms.

use leptos::prelude::*;

use crate::ui::components::{
    Button, Card, CardContent, CardHeader, CardTitle, Field, Input, StethoscopeIcon,
};

/// Which account form to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
}

impl AuthForm {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create your account",
        }
    }

    fn action(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Get Started",
        }
    }
}

/// Account form page body. `error` is shown above the form when present.
#[component]
pub fn AuthPage(form: AuthForm, error: Option<String>) -> impl IntoView {
    let switch = match form {
        AuthForm::Login => view! {
            <p class="text-sm text-slate-500">
                "New here? "
                <a href="/register" class="text-blue-600 hover:underline">"Create an account"</a>
            </p>
        }
        .into_any(),
        AuthForm::Register => view! {
            <p class="text-sm text-slate-500">
                "Already registered? "
                <a href="/login" class="text-blue-600 hover:underline">"Sign in"</a>
            </p>
        }
        .into_any(),
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <Card class="w-full max-w-md">
                <CardHeader>
                    <a href="/" class="flex items-center gap-2 text-slate-500">
                        <StethoscopeIcon class="h-5 w-5"/>
                        "Back to Home"
                    </a>
                    <CardTitle class="text-2xl">{form.title()}</CardTitle>
                </CardHeader>
                <CardContent class="space-y-4">
                    {error.map(|message| view! {
                        <div role="alert" class="rounded-lg border border-red-200 bg-red-50 px-3 py-2 text-sm text-red-700">
                            {message}
                        </div>
                    })}
                    <form method="post" action=form.action() class="space-y-4">
                        {(form == AuthForm::Register).then(|| view! {
                            <Field label="Name">
                                <Input name="name" placeholder="Your full name" autocomplete="name"/>
                            </Field>
                        })}
                        <Field label="Email">
                            <Input
                                input_type="email"
                                name="email"
                                placeholder="your@email.com"
                                autocomplete="email"
                                required=true
                            />
                        </Field>
                        <Button button_type="submit" class="w-full">
                            {form.submit_label()}
                        </Button>
                    </form>
                    {switch}
                </CardContent>
            </Card>
        </div>
    }
}
