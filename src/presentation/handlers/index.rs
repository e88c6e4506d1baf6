use axum::response::Html;

const INDEX_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Document Tasks</title>
  <style>
    body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
    label { display: block; margin-top: 1rem; font-weight: bold; }
    textarea, input, select { width: 100%; }
    pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }
  </style>
</head>
<body>
  <h1>Document Tasks</h1>
  <form id="task-form">
    <label for="task">Task</label>
    <select id="task" name="task">
      <option value="summarize">Summarization</option>
      <option value="answer">Question Answering</option>
      <option value="classify">Text Classification</option>
      <option value="translate">Translation</option>
    </select>
    <label for="file">Document (PDF, DOCX or TXT)</label>
    <input id="file" name="file" type="file" accept=".pdf,.docx,.txt">
    <label for="text">Or paste text</label>
    <textarea id="text" name="text" rows="8"></textarea>
    <label for="question">Question</label>
    <input id="question" name="question" type="text">
    <label for="target_language">Target language</label>
    <select id="target_language" name="target_language">
      <option>French</option>
      <option>German</option>
      <option>Spanish</option>
      <option>Italian</option>
      <option>Hindi</option>
      <option>Chinese</option>
    </select>
    <p><button type="submit">Run</button></p>
  </form>
  <pre id="output"></pre>
  <script>
    document.getElementById("task-form").addEventListener("submit", async (event) => {
      event.preventDefault();
      const output = document.getElementById("output");
      output.textContent = "Working...";
      const response = await fetch("/api/v1/tasks", { method: "POST", body: new FormData(event.target) });
      output.textContent = JSON.stringify(await response.json(), null, 2);
    });
  </script>
</body>
</html>
"#;

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
