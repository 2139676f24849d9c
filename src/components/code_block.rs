use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: AttrValue,
    #[prop_or(AttrValue::Static("html"))]
    pub language: AttrValue,
    #[prop_or(AttrValue::Static("example.html"))]
    pub file_name: AttrValue,
}

/// Editor-window styled snippet.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    html! {
        <div class="code-block">
            <div class="code-block-bar">
                <span class="dot red"></span>
                <span class="dot yellow"></span>
                <span class="dot green"></span>
                <span class="code-block-name">{props.file_name.clone()}</span>
            </div>
            <pre>
                <code class={format!("language-{}", props.language)}>{props.code.clone()}</code>
            </pre>
        </div>
    }
}
